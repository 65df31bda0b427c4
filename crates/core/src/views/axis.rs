use tickline_protocol::{Point, RenderCommand};

use crate::config::AxisConfig;
use crate::ticks::{TickWeight, generate_ticks};

use super::{push_main_axis, push_title};

/// Render a numeric diversity axis: title, main axis line, ticks, labels.
///
/// All coordinates are viewport-relative; the caller-supplied left offset
/// only enters object positioning, never drawing.
pub fn render_axis(config: &AxisConfig) -> Vec<RenderCommand> {
    let mut commands = Vec::with_capacity(32);

    push_title(
        &mut commands,
        &config.title,
        config.title_position,
        config.height,
        &config.tick_label_font,
        &config.tick_label_style,
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

    if config.draw_ticks {
        // Normal ticks are centered on the surface; long ticks span it.
        let normal_top = config.height * (1.0 - config.normal_tick_length);
        let normal_bottom = config.height * config.normal_tick_length;

        for tick in generate_ticks(config) {
            let (y1, y2, stroke) = match tick.weight {
                TickWeight::Normal => (normal_top, normal_bottom, &config.normal_tick_stroke),
                TickWeight::Long => (0.0, config.height, &config.long_tick_stroke),
                TickWeight::AxisOrigin => (0.0, config.height, &config.vertical_axis_stroke),
            };
            commands.push(RenderCommand::StrokePolyline {
                points: vec![Point::new(tick.x, y1), Point::new(tick.x, y2)],
                style: stroke.style.clone(),
                width: stroke.width,
            });
            if let Some(label) = tick.label {
                commands.push(RenderCommand::FillText {
                    position: label.anchor,
                    text: label.text,
                    font: config.tick_label_font.clone(),
                    style: config.tick_label_style.clone(),
                });
            }
        }
    }

    commands
}
