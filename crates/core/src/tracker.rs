//! Position computation for followed objects.
//!
//! The widget never owns the visual markers it follows; callers register a
//! value + vertical offset per marker and apply the computed `left`/`top`
//! to their own elements after each update. Removal is likewise the
//! caller's responsibility.

use serde::{Deserialize, Serialize};

use crate::projector::Projection;

/// A caller-owned marker followed on the axis.
///
/// `value` determines the horizontal position via projection; `y_offset` is
/// passed through vertically untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackedObject<D> {
    pub value: D,
    pub y_offset: f64,
}

impl<D> TrackedObject<D> {
    pub fn new(value: D, y_offset: f64) -> Self {
        Self { value, y_offset }
    }
}

/// Computed absolute pixel position for one tracked object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectPosition {
    pub left: f64,
    pub top: f64,
}

/// Compute positions for a list of tracked objects.
///
/// One output per input, order preserved, inputs never mutated.
/// `position_offset` is the config-level `(dx, dy)` applied to every
/// marker. Positions are not clamped: a marker outside `[0, width]` is
/// allowed to land off the axis surface.
pub fn positions_for<P: Projection>(
    objects: &[TrackedObject<P::Domain>],
    projector: &P,
    left_offset: f64,
    position_offset: (f64, f64),
) -> Vec<ObjectPosition> {
    objects
        .iter()
        .map(|object| ObjectPosition {
            left: projector.project(&object.value, left_offset) + position_offset.0,
            top: object.y_offset + position_offset.1,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projector::{LinearProjector, Projection};

    #[test]
    fn output_is_length_and_order_preserving() {
        let projector = LinearProjector::new(0.0, 1.0, 1000.0);
        let objects = vec![
            TrackedObject::new(0.75, 10.0),
            TrackedObject::new(0.25, 20.0),
            TrackedObject::new(0.5, 30.0),
        ];
        let positions = positions_for(&objects, &projector, 0.0, (0.0, 0.0));
        assert_eq!(positions.len(), objects.len());
        assert_eq!(positions[0].left, 750.0);
        assert_eq!(positions[1].left, 250.0);
        assert_eq!(positions[2].left, 500.0);
    }

    #[test]
    fn minimum_value_matches_projection() {
        let projector = LinearProjector::new(0.2, 0.8, 600.0);
        let objects = [TrackedObject::new(0.2, 0.0)];
        let positions = positions_for(&objects, &projector, 50.0, (0.0, 0.0));
        assert_eq!(positions[0].left, projector.project(&0.2, 50.0));
    }

    #[test]
    fn position_offset_is_applied() {
        let projector = LinearProjector::new(0.0, 1.0, 1000.0);
        let objects = [TrackedObject::new(0.5, 40.0)];
        let positions = positions_for(&objects, &projector, 0.0, (3.0, -7.0));
        assert_eq!(positions[0].left, 503.0);
        assert_eq!(positions[0].top, 33.0);
    }

    #[test]
    fn out_of_range_markers_are_not_clamped() {
        let projector = LinearProjector::new(0.0, 1.0, 1000.0);
        let objects = [TrackedObject::new(1.5, 0.0), TrackedObject::new(-0.5, 0.0)];
        let positions = positions_for(&objects, &projector, 0.0, (0.0, 0.0));
        assert_eq!(positions[0].left, 1500.0);
        assert_eq!(positions[1].left, -500.0);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let projector = LinearProjector::new(0.0, 1.0, 1000.0);
        let objects: [TrackedObject<f64>; 0] = [];
        assert!(positions_for(&objects, &projector, 0.0, (0.0, 0.0)).is_empty());
    }
}
