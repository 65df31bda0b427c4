use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The pixel region an axis renders into.
///
/// `left_offset` is the absolute screen x of the axis origin. Hosts supply
/// it at query time rather than at configuration time, because the
/// containing element can move between updates (reflow, window resize).
/// The core never caches it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub left_offset: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, left_offset: f64) -> Self {
        Self {
            width,
            height,
            left_offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_roundtrip() {
        let vp = Viewport::new(1000.0, 100.0, 42.0);
        let json = serde_json::to_string(&vp).unwrap();
        let back: Viewport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vp);
    }
}
