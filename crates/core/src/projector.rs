//! Domain → pixel projection.
//!
//! One [`Projection`] capability, two implementations selected by domain
//! kind: [`LinearProjector`] for numeric axes and [`CalendarProjector`] for
//! date axes. Both are pure value-to-pixel maps; the absolute left offset of
//! the axis is supplied at every call and never cached, because host layout
//! can change between updates.

use chrono::NaiveDate;

use crate::config::{AxisConfig, TimelineConfig};

const MS_PER_DAY: f64 = 86_400_000.0;

/// Maps a domain value to an absolute pixel x position.
pub trait Projection {
    type Domain;

    /// Project `value` to an absolute pixel x, `left_offset` included.
    ///
    /// A degenerate range (zero domain span) yields the effective left
    /// offset as a defined sentinel instead of propagating NaN or infinity
    /// into drawing.
    fn project(&self, value: &Self::Domain, left_offset: f64) -> f64;
}

/// Affine projection for a numeric axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearProjector {
    min: f64,
    max: f64,
    width: f64,
}

impl LinearProjector {
    pub fn new(min: f64, max: f64, width: f64) -> Self {
        Self { min, max, width }
    }

    pub fn from_config(config: &AxisConfig) -> Self {
        Self::new(config.min_value, config.max_value, config.width)
    }

    /// Pixels per domain unit, or `None` for a degenerate range.
    pub fn pix_per_unit(&self) -> Option<f64> {
        let span = self.max - self.min;
        if span > 0.0 { Some(self.width / span) } else { None }
    }
}

impl Projection for LinearProjector {
    type Domain = f64;

    fn project(&self, value: &f64, left_offset: f64) -> f64 {
        let Some(pix_per_unit) = self.pix_per_unit() else {
            return left_offset;
        };
        let zero_position = -self.min * pix_per_unit;
        value * pix_per_unit + zero_position + left_offset
    }
}

/// Whole-day distance between two dates.
///
/// Computed from the absolute millisecond difference divided by one day and
/// rounded to the nearest integer, not truncated. Rounding absorbs the
/// ±1 hour drift a daylight-saving boundary introduces when timestamps come
/// from zoned sources, which truncation would turn into an off-by-one day.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    let ms = (b - a).num_milliseconds().abs();
    (ms as f64 / MS_PER_DAY).round() as i64
}

/// Day-granular projection for a timeline axis.
///
/// `edge_correction` is the fixed pixel correction subtracted from the
/// caller-supplied left offset (see
/// [`TimelineConfig::edge_correction_px`](crate::config::TimelineConfig)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarProjector {
    min: NaiveDate,
    max: NaiveDate,
    width: f64,
    edge_correction: f64,
}

impl CalendarProjector {
    pub fn new(min: NaiveDate, max: NaiveDate, width: f64, edge_correction: f64) -> Self {
        Self {
            min,
            max,
            width,
            edge_correction,
        }
    }

    pub fn from_config(config: &TimelineConfig) -> Self {
        Self::new(
            config.min_date,
            config.max_date,
            config.width,
            config.edge_correction_px,
        )
    }

    /// Pixels per calendar day, or `None` for a degenerate (zero-day) range.
    pub fn pix_per_day(&self) -> Option<f64> {
        let days = days_between(self.min, self.max);
        if days > 0 {
            Some(self.width / days as f64)
        } else {
            None
        }
    }
}

impl Projection for CalendarProjector {
    type Domain = NaiveDate;

    fn project(&self, value: &NaiveDate, left_offset: f64) -> f64 {
        let left = left_offset - self.edge_correction;
        let Some(pix_per_day) = self.pix_per_day() else {
            return left;
        };
        days_between(self.min, *value) as f64 * pix_per_day + left
    }
}
