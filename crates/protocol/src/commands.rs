use serde::{Deserialize, Serialize};

use crate::shared_str::SharedStr;
use crate::types::Point;

/// A single, stateless render instruction.
///
/// The core emits a `Vec<RenderCommand>` per update. Renderers consume the
/// list sequentially — each command carries all the data it needs, so a
/// renderer keeps no pen state between commands.
///
/// Style and font values are passed through verbatim (CSS color strings,
/// CSS font shorthand); the protocol does not interpret them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Stroke an open polyline through `points` in order.
    StrokePolyline {
        points: Vec<Point>,
        style: SharedStr,
        width: f64,
    },

    /// Fill a text string with its anchor at `position`.
    FillText {
        position: Point,
        text: SharedStr,
        font: SharedStr,
        style: SharedStr,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyline_roundtrip() {
        let cmd = RenderCommand::StrokePolyline {
            points: vec![Point::new(0.0, 50.0), Point::new(1000.0, 50.0)],
            style: "#FFF".into(),
            width: 3.0,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        let back: RenderCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }

    #[test]
    fn text_roundtrip() {
        let cmd = RenderCommand::FillText {
            position: Point::new(12.0, 96.0),
            text: "0.5".into(),
            font: "8pt Helvetiker, sans-serif".into(),
            style: "#FFF".into(),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        let back: RenderCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }
}
