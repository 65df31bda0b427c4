//! View functions: turn tick descriptors and config into render commands.
//!
//! Views are pure — they emit a fresh `Vec<RenderCommand>` per call and hold
//! no state between calls. Renderers consume the list in order, so emission
//! order is draw order: title, main axis line, then ticks.

pub mod axis;
pub mod timeline;

use tickline_protocol::{Point, RenderCommand, SharedStr};

use crate::config::TitlePosition;

/// Baseline of an above-the-surface title, relative to the surface top.
const TITLE_ABOVE_BASELINE: f64 = -4.0;
/// Gap between the surface bottom and a below-the-surface title baseline.
const TITLE_BELOW_GAP: f64 = 12.0;

/// Emit the widget title, if any. An empty title draws nothing.
fn push_title(
    commands: &mut Vec<RenderCommand>,
    title: &SharedStr,
    position: TitlePosition,
    height: f64,
    font: &SharedStr,
    style: &SharedStr,
) {
    if title.is_empty() {
        return;
    }
    let y = match position {
        TitlePosition::Above => TITLE_ABOVE_BASELINE,
        TitlePosition::Below => height + TITLE_BELOW_GAP,
    };
    commands.push(RenderCommand::FillText {
        position: Point::new(0.0, y),
        text: title.clone(),
        font: font.clone(),
        style: style.clone(),
    });
}

/// Emit the main axis line across the full width at `axis_y`.
fn push_main_axis(
    commands: &mut Vec<RenderCommand>,
    width: f64,
    axis_y: f64,
    style: &SharedStr,
    stroke_width: f64,
) {
    commands.push(RenderCommand::StrokePolyline {
        points: vec![Point::new(0.0, axis_y), Point::new(width, axis_y)],
        style: style.clone(),
        width: stroke_width,
    });
}
