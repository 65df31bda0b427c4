//! Widget configuration records.
//!
//! Each widget instance owns one immutable, validated config. Mutation goes
//! through copy-with-override constructors (`with_width`, `with_range`, …)
//! followed by [`set_config`](crate::widget::AxisWidget::set_config), so a
//! rejected config never leaves a widget half-updated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tickline_protocol::SharedStr;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("width must be positive, got {0}")]
    NonPositiveWidth(f64),
    #[error("height must be positive, got {0}")]
    NonPositiveHeight(f64),
    #[error("tick spacing must be positive, got {0}")]
    NonPositiveTickSpacing(f64),
    #[error("day tick stride must be at least 1")]
    ZeroDayStride,
}

/// Stroke color + line width, passed through to the drawing surface verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub style: SharedStr,
    pub width: f64,
}

impl StrokeStyle {
    pub fn new(style: impl Into<SharedStr>, width: f64) -> Self {
        Self {
            style: style.into(),
            width,
        }
    }
}

/// Where the widget title is drawn relative to the axis surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TitlePosition {
    Above,
    Below,
}

/// Configuration for a numeric diversity axis.
///
/// Defaults mirror a white-on-dark ruler: a `[0, 1]` range with ticks every
/// 0.1 units and long ticks every 0.5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    pub width: f64,
    pub height: f64,

    /// Minimum value displayed (left edge).
    pub min_value: f64,
    /// Maximum value displayed (right edge).
    pub max_value: f64,

    pub draw_main_axis: bool,
    pub main_axis_stroke: StrokeStyle,
    /// Shift of the main axis line above the vertical center, in pixels.
    pub main_axis_offset: f64,

    pub draw_ticks: bool,
    /// Domain-unit distance between adjacent ticks.
    pub tick_spacing: f64,
    /// Domain-unit distance between long (major) ticks.
    pub long_tick_every: f64,
    pub normal_tick_stroke: StrokeStyle,
    pub long_tick_stroke: StrokeStyle,
    /// Normal tick extent as a fraction of the widget height; a normal tick
    /// spans `height * (1 - f) .. height * f`.
    pub normal_tick_length: f64,

    pub draw_tick_labels: bool,
    pub tick_label_font: SharedStr,
    pub tick_label_style: SharedStr,
    /// Offset of the label baseline from the bottom of a long tick.
    pub tick_label_y_offset: f64,

    /// Emphasize the tick at value zero as the vertical axis.
    pub draw_vertical_axis: bool,
    pub vertical_axis_stroke: StrokeStyle,

    pub title: SharedStr,
    pub title_position: TitlePosition,

    /// Extra `(dx, dy)` applied to every tracked object position.
    pub position_offset: (f64, f64),
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 100.0,
            min_value: 0.0,
            max_value: 1.0,
            draw_main_axis: true,
            main_axis_stroke: StrokeStyle::new("#FFF", 3.0),
            main_axis_offset: 0.0,
            draw_ticks: true,
            tick_spacing: 0.1,
            long_tick_every: 0.5,
            normal_tick_stroke: StrokeStyle::new("#FFF", 1.0),
            long_tick_stroke: StrokeStyle::new("#FFF", 2.0),
            normal_tick_length: 0.75,
            draw_tick_labels: true,
            tick_label_font: "8pt Helvetiker, sans-serif".into(),
            tick_label_style: "#FFF".into(),
            tick_label_y_offset: -4.0,
            draw_vertical_axis: true,
            vertical_axis_stroke: StrokeStyle::new("#FFF", 5.0),
            title: "Diversity".into(),
            title_position: TitlePosition::Above,
            position_offset: (0.0, 0.0),
        }
    }
}

impl AxisConfig {
    /// Fail-fast structural validation. A degenerate range
    /// (`max_value <= min_value`) is deliberately *not* an error here: it is
    /// a valid transient state during incremental configuration, handled by
    /// sentinel projection and empty tick sequences.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0.0 {
            return Err(ConfigError::NonPositiveWidth(self.width));
        }
        if self.height <= 0.0 {
            return Err(ConfigError::NonPositiveHeight(self.height));
        }
        if self.tick_spacing <= 0.0 {
            return Err(ConfigError::NonPositiveTickSpacing(self.tick_spacing));
        }
        Ok(())
    }

    pub fn with_width(self, width: f64) -> Self {
        Self { width, ..self }
    }

    pub fn with_height(self, height: f64) -> Self {
        Self { height, ..self }
    }

    pub fn with_range(self, min_value: f64, max_value: f64) -> Self {
        Self {
            min_value,
            max_value,
            ..self
        }
    }
}

/// Configuration for a calendar timeline axis.
///
/// Shares the axis surface options with [`AxisConfig`] but replaces the
/// numeric range with a date range and uniform tick spacing with per-kind
/// (year/month/day) calendar ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineConfig {
    pub width: f64,
    pub height: f64,

    /// Earliest date displayed (left edge).
    pub min_date: NaiveDate,
    /// Latest date displayed (right edge).
    pub max_date: NaiveDate,

    pub draw_main_axis: bool,
    pub main_axis_stroke: StrokeStyle,
    pub main_axis_offset: f64,

    pub draw_year_ticks: bool,
    pub draw_year_labels: bool,
    pub year_tick_stroke: StrokeStyle,
    /// Half-extent of a year tick above/below the main axis line.
    pub year_tick_half_length: f64,
    pub year_label_font: SharedStr,
    pub year_label_offset: f64,

    pub draw_month_ticks: bool,
    pub draw_month_labels: bool,
    pub month_tick_stroke: StrokeStyle,
    pub month_tick_half_length: f64,
    pub month_label_font: SharedStr,
    pub month_label_offset: f64,

    pub draw_day_ticks: bool,
    pub day_tick_stroke: StrokeStyle,
    pub day_tick_half_length: f64,
    /// Emit a day tick only where the day-of-month is a multiple of this.
    pub day_stride: u32,

    /// Fixed correction subtracted from the caller-supplied left offset when
    /// positioning tracked objects. Kept overridable; the historical default
    /// is 8 px.
    pub edge_correction_px: f64,

    pub title: SharedStr,
    pub title_position: TitlePosition,

    pub position_offset: (f64, f64),
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 100.0,
            min_date: NaiveDate::from_ymd_opt(2010, 1, 1).unwrap_or_default(),
            max_date: NaiveDate::from_ymd_opt(2010, 1, 2).unwrap_or_default(),
            draw_main_axis: true,
            main_axis_stroke: StrokeStyle::new("#FFF", 3.0),
            main_axis_offset: 0.0,
            draw_year_ticks: true,
            draw_year_labels: true,
            year_tick_stroke: StrokeStyle::new("#FFF", 5.0),
            year_tick_half_length: 15.0,
            year_label_font: "12pt Helvetiker, sans-serif".into(),
            year_label_offset: 12.0,
            draw_month_ticks: true,
            draw_month_labels: false,
            month_tick_stroke: StrokeStyle::new("#FFF", 3.0),
            month_tick_half_length: 9.0,
            month_label_font: "10pt Helvetiker, sans-serif".into(),
            month_label_offset: 10.0,
            draw_day_ticks: true,
            day_tick_stroke: StrokeStyle::new("#FFF", 1.0),
            day_tick_half_length: 5.0,
            day_stride: 10,
            edge_correction_px: 8.0,
            title: "Time".into(),
            title_position: TitlePosition::Above,
            position_offset: (0.0, 0.0),
        }
    }
}

impl TimelineConfig {
    /// Fail-fast structural validation. An inverted or single-day date range
    /// is not an error; it yields an empty tick sequence.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0.0 {
            return Err(ConfigError::NonPositiveWidth(self.width));
        }
        if self.height <= 0.0 {
            return Err(ConfigError::NonPositiveHeight(self.height));
        }
        if self.day_stride == 0 {
            return Err(ConfigError::ZeroDayStride);
        }
        Ok(())
    }

    pub fn with_width(self, width: f64) -> Self {
        Self { width, ..self }
    }

    pub fn with_height(self, height: f64) -> Self {
        Self { height, ..self }
    }

    pub fn with_dates(self, min_date: NaiveDate, max_date: NaiveDate) -> Self {
        Self {
            min_date,
            max_date,
            ..self
        }
    }
}
