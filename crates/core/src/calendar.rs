//! Calendar tick generation for the timeline axis.
//!
//! Instead of uniform domain spacing, the timeline walks whole calendar days
//! from `min_date` to `max_date` inclusive and classifies each day by
//! boundary kind. Classification is mutually exclusive with year beating
//! month beating day: January 1st emits a year tick only, never also a month
//! tick. Days that are not a stride multiple emit nothing at all.

use chrono::Datelike;
use tickline_protocol::{Point, SharedStr};

use crate::config::TimelineConfig;
use crate::projector::days_between;
use crate::ticks::TickLabel;

/// Horizontal anchor gap between a tick line and its label.
const LABEL_GAP_PX: f64 = 2.0;

/// Calendar boundary kind of a timeline tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarTickKind {
    Year,
    Month,
    Day,
}

/// One timeline tick: viewport-relative x position, boundary kind, optional
/// label.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTickDescriptor {
    pub x: f64,
    pub kind: CalendarTickKind,
    pub label: Option<TickLabel>,
}

/// Generate the tick sequence for a timeline config.
///
/// Pure function of the config: finite (bounded by the day count between the
/// two dates), ascending in x, re-callable with identical output. An
/// inverted or zero-day range yields an empty sequence, not an error.
///
/// Year labels are the 4-digit year, month labels the full month name. Both
/// baselines sit below the month tick extent, offset by their own label
/// offset. Day ticks carry no label.
pub fn generate_calendar_ticks(config: &TimelineConfig) -> Vec<CalendarTickDescriptor> {
    if !(config.draw_year_ticks || config.draw_month_ticks || config.draw_day_ticks) {
        return Vec::new();
    }
    if config.max_date < config.min_date {
        return Vec::new();
    }
    let n_days = days_between(config.min_date, config.max_date);
    if n_days == 0 {
        return Vec::new();
    }

    let pix_per_day = config.width / n_days as f64;
    let axis_y = config.height / 2.0 - config.main_axis_offset;
    let label_shelf = axis_y + config.month_tick_half_length;

    let mut ticks = Vec::new();
    let mut day = config.min_date;
    let mut x = 0.0;

    while day <= config.max_date {
        if day.day() == 1 && day.month() == 1 && config.draw_year_ticks {
            let label = config.draw_year_labels.then(|| TickLabel {
                text: SharedStr::from(day.format("%Y").to_string()),
                anchor: Point::new(
                    x + config.year_tick_stroke.width + LABEL_GAP_PX,
                    label_shelf + config.year_label_offset,
                ),
            });
            ticks.push(CalendarTickDescriptor {
                x,
                kind: CalendarTickKind::Year,
                label,
            });
        } else if day.day() == 1 && config.draw_month_ticks {
            let label = config.draw_month_labels.then(|| TickLabel {
                text: SharedStr::from(day.format("%B").to_string()),
                anchor: Point::new(
                    x + config.month_tick_stroke.width + LABEL_GAP_PX,
                    label_shelf + config.month_label_offset,
                ),
            });
            ticks.push(CalendarTickDescriptor {
                x,
                kind: CalendarTickKind::Month,
                label,
            });
        } else if config.draw_day_ticks && day.day() % config.day_stride == 0 {
            ticks.push(CalendarTickDescriptor {
                x,
                kind: CalendarTickKind::Day,
                label: None,
            });
        }

        let Some(next) = day.succ_opt() else { break };
        day = next;
        x += pix_per_day;
    }

    ticks
}
