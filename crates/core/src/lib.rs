//! Core axis mathematics for tickline.
//!
//! Maps a numeric or calendar-date range onto pixel space, generates tick
//! sequences along that mapping, and computes positions for caller-owned
//! markers. Drawing happens elsewhere: views emit stateless
//! [`RenderCommand`](tickline_protocol::RenderCommand) lists that any
//! surface can realize (see [`svg`] for the reference realization).
//!
//! The usual entry points are [`widget::AxisWidget`] for a numeric axis and
//! [`widget::TimelineWidget`] for a calendar timeline; the pieces underneath
//! ([`projector`], [`ticks`], [`calendar`], [`tracker`]) are public for
//! hosts that drive their own update cycle.

pub mod calendar;
pub mod config;
pub mod projector;
pub mod svg;
pub mod ticks;
pub mod tracker;
pub mod views;
pub mod widget;

pub use calendar::{CalendarTickDescriptor, CalendarTickKind, generate_calendar_ticks};
pub use config::{AxisConfig, ConfigError, StrokeStyle, TimelineConfig, TitlePosition};
pub use projector::{CalendarProjector, LinearProjector, Projection, days_between};
pub use ticks::{TickDescriptor, TickLabel, TickWeight, generate_ticks};
pub use tracker::{ObjectPosition, TrackedObject, positions_for};
pub use widget::{AxisWidget, TimelineWidget, UpdateFrame};
