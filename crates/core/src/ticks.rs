//! Numeric tick generation.
//!
//! Walks the axis from left to right in tick-spacing steps and classifies
//! each stop as a normal tick, a long (major) tick, or the vertical axis at
//! value zero. The walk carries the domain value scaled by
//! [`ROUNDING_SCALE`]: with decimal spacings like 0.1, accumulating the raw
//! value drifts in binary floating point and the divisibility test against
//! the long-tick interval starts missing exact multiples. Scaled by 1000 the
//! accumulated value stays an exact integer-valued float, so
//! `(value / long) % 1 == 0` is reliable.

use tickline_protocol::{Point, SharedStr};

use crate::config::AxisConfig;

/// Fixed integer factor applied to domain values before divisibility tests.
pub const ROUNDING_SCALE: f64 = 1000.0;

/// Horizontal anchor gap between a tick line and its label.
const LABEL_GAP_PX: f64 = 2.0;

/// Visual weight of a numeric tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickWeight {
    Normal,
    Long,
    /// The tick at value zero, emphasized as the vertical axis.
    AxisOrigin,
}

/// A formatted tick label with its precomputed anchor position.
#[derive(Debug, Clone, PartialEq)]
pub struct TickLabel {
    pub text: SharedStr,
    pub anchor: Point,
}

/// One tick: viewport-relative x position, weight, optional label.
#[derive(Debug, Clone, PartialEq)]
pub struct TickDescriptor {
    pub x: f64,
    pub weight: TickWeight,
    pub label: Option<TickLabel>,
}

/// Generate the tick sequence for a numeric axis config.
///
/// Pure function of the config: finite, ascending in x over `[0, width]`,
/// and re-callable with identical output. A degenerate range
/// (`max_value <= min_value`) yields an empty sequence.
///
/// `long_tick_every` need not be an exact multiple of `tick_spacing`; the
/// divisibility test then simply matches fewer stops, giving an irregular
/// long-tick cadence rather than an error.
pub fn generate_ticks(config: &AxisConfig) -> Vec<TickDescriptor> {
    let span = config.max_value - config.min_value;
    if span <= 0.0 {
        return Vec::new();
    }

    let width = config.width;
    let pix_per_unit = width / span;
    let step_px = pix_per_unit * config.tick_spacing;
    let step_scaled = config.tick_spacing * ROUNDING_SCALE;
    let long_scaled = config.long_tick_every * ROUNDING_SCALE;
    let label_baseline = config.height + config.tick_label_y_offset;

    let mut ticks = Vec::new();
    let mut x = 0.0;
    let mut value_scaled = config.min_value * ROUNDING_SCALE;

    while x <= width {
        let weight = if (value_scaled / long_scaled) % 1.0 == 0.0 {
            if value_scaled == 0.0 && config.draw_vertical_axis {
                TickWeight::AxisOrigin
            } else {
                TickWeight::Long
            }
        } else {
            TickWeight::Normal
        };

        let label = if weight != TickWeight::Normal && config.draw_tick_labels {
            let stroke_width = match weight {
                TickWeight::AxisOrigin => config.vertical_axis_stroke.width,
                _ => config.long_tick_stroke.width,
            };
            Some(TickLabel {
                text: SharedStr::from(format!("{}", value_scaled / ROUNDING_SCALE)),
                anchor: Point::new(x + stroke_width + LABEL_GAP_PX, label_baseline),
            })
        } else {
            None
        };

        ticks.push(TickDescriptor { x, weight, label });

        x += step_px;
        value_scaled += step_scaled;
    }

    ticks
}
