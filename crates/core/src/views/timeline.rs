use tickline_protocol::{Point, RenderCommand};

use crate::calendar::{CalendarTickKind, generate_calendar_ticks};
use crate::config::TimelineConfig;

use super::{push_main_axis, push_title};

/// Render a calendar timeline: title, main axis line, year/month/day ticks.
///
/// Ticks are centered on the main axis line and extend half their length
/// above and below it. Label font and fill follow the tick kind; the fill
/// reuses the kind's stroke style.
pub fn render_timeline(config: &TimelineConfig) -> Vec<RenderCommand> {
    let mut commands = Vec::with_capacity(32);

    push_title(
        &mut commands,
        &config.title,
        config.title_position,
        config.height,
        &config.year_label_font,
        &config.year_tick_stroke.style,
    );

    let axis_y = config.height / 2.0 - config.main_axis_offset;
    if config.draw_main_axis {
        push_main_axis(
            &mut commands,
            config.width,
            axis_y,
            &config.main_axis_stroke.style,
            config.main_axis_stroke.width,
        );
    }

    for tick in generate_calendar_ticks(config) {
        let (stroke, half_length, font) = match tick.kind {
            CalendarTickKind::Year => (
                &config.year_tick_stroke,
                config.year_tick_half_length,
                &config.year_label_font,
            ),
            CalendarTickKind::Month => (
                &config.month_tick_stroke,
                config.month_tick_half_length,
                &config.month_label_font,
            ),
            CalendarTickKind::Day => (
                &config.day_tick_stroke,
                config.day_tick_half_length,
                &config.month_label_font,
            ),
        };
        commands.push(RenderCommand::StrokePolyline {
            points: vec![
                Point::new(tick.x, axis_y - half_length),
                Point::new(tick.x, axis_y + half_length),
            ],
            style: stroke.style.clone(),
            width: stroke.width,
        });
        if let Some(label) = tick.label {
            commands.push(RenderCommand::FillText {
                position: label.anchor,
                text: label.text,
                font: font.clone(),
                style: stroke.style.clone(),
            });
        }
    }

    commands
}
