//! Integration test: drive a full-year timeline widget through an update
//! cycle and verify tick classification, marker positioning, and the SVG
//! realization of the command stream.

use chrono::NaiveDate;
use tickline_core::svg::render_svg;
use tickline_core::{
    CalendarProjector, CalendarTickKind, Projection, TimelineConfig, TimelineWidget,
    TrackedObject, generate_calendar_ticks,
};
use tickline_protocol::RenderCommand;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn full_year_timeline_update_cycle() {
    let config = TimelineConfig::default()
        .with_dates(date(2010, 1, 1), date(2010, 12, 31))
        .with_width(1000.0);
    let mut widget = TimelineWidget::new(config).expect("valid config");

    // Follow three markers across the year.
    widget.add_object(TrackedObject::new(date(2010, 1, 1), 10.0), 0.0);
    widget.add_object(TrackedObject::new(date(2010, 7, 1), 20.0), 0.0);
    let frame = widget.add_object(TrackedObject::new(date(2010, 12, 31), 30.0), 100.0);

    // Positions come back one per object, in registration order, and the
    // range endpoints land on the (edge-corrected) viewport edges.
    assert_eq!(frame.positions.len(), 3);
    let left = 100.0 - widget.config().edge_correction_px;
    assert!((frame.positions[0].left - left).abs() < 1e-9);
    assert!((frame.positions[2].left - (left + 1000.0)).abs() < 1e-9);
    assert_eq!(frame.positions[1].top, 20.0);

    // Marker positions agree with direct projection.
    let projector = CalendarProjector::from_config(widget.config());
    assert_eq!(
        frame.positions[1].left,
        projector.project(&date(2010, 7, 1), 100.0)
    );

    // Tick census for 2010: one year boundary, eleven month boundaries
    // (January 1st is claimed by the year tick), and day ticks at each
    // stride multiple of the day-of-month.
    let ticks = generate_calendar_ticks(widget.config());
    let count = |kind: CalendarTickKind| ticks.iter().filter(|t| t.kind == kind).count();
    assert_eq!(count(CalendarTickKind::Year), 1);
    assert_eq!(count(CalendarTickKind::Month), 11);
    assert_eq!(count(CalendarTickKind::Day), 35);

    // The frame draws the main axis plus one polyline per tick.
    let polylines = frame
        .commands
        .iter()
        .filter(|c| matches!(c, RenderCommand::StrokePolyline { .. }))
        .count();
    assert_eq!(polylines, 1 + ticks.len());

    // Update is a pure read: repeating it changes nothing.
    assert_eq!(widget.update(100.0), widget.update(100.0));

    // SVG realization carries the year label through.
    let svg = render_svg(&frame.commands, 1000.0, 100.0, Some("#000"));
    assert!(svg.contains(">2010</text>"));
    assert!(svg.contains("stroke=\"#FFF\""));
}

#[test]
fn inverted_timeline_is_empty_but_not_an_error() {
    let config = TimelineConfig::default().with_dates(date(2011, 1, 1), date(2010, 1, 1));
    let widget = TimelineWidget::new(config).expect("inverted range is a valid transient state");
    let frame = widget.update(0.0);
    assert!(generate_calendar_ticks(widget.config()).is_empty());
    // The frame still carries the title and main axis, just no ticks.
    let polylines = frame
        .commands
        .iter()
        .filter(|c| matches!(c, RenderCommand::StrokePolyline { .. }))
        .count();
    assert_eq!(polylines, 1);
}
