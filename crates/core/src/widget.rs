//! Widget state: a validated config plus the tracked-object list.
//!
//! `update` is a pure read of widget state — it returns a fresh
//! [`UpdateFrame`] and mutates nothing, so a caller that skips or drops a
//! frame keeps whatever it rendered last, and repeated calls with unchanged
//! inputs produce identical frames.

use chrono::NaiveDate;
use tickline_protocol::RenderCommand;

use crate::config::{AxisConfig, ConfigError, TimelineConfig};
use crate::projector::{CalendarProjector, LinearProjector};
use crate::tracker::{ObjectPosition, TrackedObject, positions_for};
use crate::views::axis::render_axis;
use crate::views::timeline::render_timeline;

/// One update cycle's output: object positions first (callers apply them to
/// their own elements), then the draw commands in draw order.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateFrame {
    pub positions: Vec<ObjectPosition>,
    pub commands: Vec<RenderCommand>,
}

/// A numeric diversity axis widget.
#[derive(Debug, Clone)]
pub struct AxisWidget {
    config: AxisConfig,
    objects: Vec<TrackedObject<f64>>,
}

impl AxisWidget {
    /// Create a widget from a config, validating it fail-fast.
    pub fn new(config: AxisConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            objects: Vec::new(),
        })
    }

    pub fn config(&self) -> &AxisConfig {
        &self.config
    }

    /// Replace the config. A rejected config leaves the widget unchanged.
    pub fn set_config(&mut self, config: AxisConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn objects(&self) -> &[TrackedObject<f64>] {
        &self.objects
    }

    /// Register a marker to follow and recompute immediately.
    pub fn add_object(&mut self, object: TrackedObject<f64>, left_offset: f64) -> UpdateFrame {
        self.objects.push(object);
        self.update(left_offset)
    }

    /// Recompute marker positions, then the render command list.
    ///
    /// `left_offset` is the absolute screen x of the axis origin, re-read
    /// every call since host layout may have changed.
    pub fn update(&self, left_offset: f64) -> UpdateFrame {
        let projector = LinearProjector::from_config(&self.config);
        let positions = positions_for(
            &self.objects,
            &projector,
            left_offset,
            self.config.position_offset,
        );
        let commands = render_axis(&self.config);
        UpdateFrame {
            positions,
            commands,
        }
    }
}

/// A calendar timeline widget.
#[derive(Debug, Clone)]
pub struct TimelineWidget {
    config: TimelineConfig,
    objects: Vec<TrackedObject<NaiveDate>>,
}

impl TimelineWidget {
    /// Create a widget from a config, validating it fail-fast.
    pub fn new(config: TimelineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            objects: Vec::new(),
        })
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Replace the config. A rejected config leaves the widget unchanged.
    pub fn set_config(&mut self, config: TimelineConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn objects(&self) -> &[TrackedObject<NaiveDate>] {
        &self.objects
    }

    /// Register a marker to follow and recompute immediately.
    pub fn add_object(
        &mut self,
        object: TrackedObject<NaiveDate>,
        left_offset: f64,
    ) -> UpdateFrame {
        self.objects.push(object);
        self.update(left_offset)
    }

    /// Recompute marker positions, then the render command list.
    pub fn update(&self, left_offset: f64) -> UpdateFrame {
        let projector = CalendarProjector::from_config(&self.config);
        let positions = positions_for(
            &self.objects,
            &projector,
            left_offset,
            self.config.position_offset,
        );
        let commands = render_timeline(&self.config);
        UpdateFrame {
            positions,
            commands,
        }
    }
}
