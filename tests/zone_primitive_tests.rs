use chart_overlays::annotations::{ZoneAnnotation, ZoneKind};
use chart_overlays::core::{CandleWindow, CoordinateBridge, CoordinateSource, OhlcBar, TimeRange};
use chart_overlays::host::OverlayPrimitive;
use chart_overlays::overlay::{ZonePrimitive, ZoneStyle};
use chart_overlays::render::DrawSurface;
use chart_overlays::RecordingHost;

fn host() -> RecordingHost {
    RecordingHost::new(800.0, 400.0, TimeRange::new(0.0, 100.0), (0.0, 100.0)).expect("host")
}

fn window(times: &[f64]) -> CandleWindow {
    let bars = times
        .iter()
        .map(|&t| OhlcBar::new(t, 50.0, 55.0, 45.0, 52.0).expect("bar"))
        .collect();
    CandleWindow::new(bars).expect("window")
}

fn zone(upper: f64, lower: f64, start: Option<f64>, end: Option<f64>) -> ZoneAnnotation {
    ZoneAnnotation::banded(ZoneKind::SupportResistance, upper, lower, start, end).expect("zone")
}

#[test]
fn rect_edges_match_time_coordinates_exactly() {
    let host = host();
    let bridge = CoordinateBridge::new(&host, host.main_series());
    let candles = window(&[0.0, 50.0, 100.0]);

    let primitive = ZonePrimitive::new(
        zone(60.0, 40.0, Some(20.0), Some(80.0)),
        ZoneStyle::for_kind(ZoneKind::SupportResistance),
        candles.last_time(),
    );

    let mut surface = DrawSurface::new(800.0, 400.0).expect("surface");
    primitive.draw(&mut surface, &bridge);

    assert_eq!(surface.rects.len(), 1);
    let rect = surface.rects[0];
    assert_eq!(rect.left, bridge.time_to_x(20.0).expect("left x"));
    assert_eq!(rect.right, bridge.time_to_x(80.0).expect("right x"));
    assert_eq!(rect.top, bridge.price_to_y(60.0).expect("top y"));
    assert_eq!(rect.bottom, bridge.price_to_y(40.0).expect("bottom y"));

    // Both boundary lines span the full rectangle width.
    assert_eq!(surface.lines.len(), 2);
    for line in &surface.lines {
        assert_eq!(line.x1, rect.left);
        assert_eq!(line.x2, rect.right);
    }
}

#[test]
fn end_time_past_last_candle_clamps_to_last_candle_x() {
    let host = host();
    let bridge = CoordinateBridge::new(&host, host.main_series());
    let candles = window(&[0.0, 30.0, 60.0]);

    let primitive = ZonePrimitive::new(
        zone(60.0, 40.0, Some(10.0), Some(95.0)),
        ZoneStyle::for_kind(ZoneKind::SupportResistance),
        candles.last_time(),
    );

    let mut surface = DrawSurface::new(800.0, 400.0).expect("surface");
    primitive.draw(&mut surface, &bridge);

    let last_candle_x = bridge.time_to_x(60.0).expect("last candle x");
    assert_eq!(surface.rects[0].right, last_candle_x);
}

#[test]
fn open_ended_zone_clamps_to_last_candle_not_surface_edge() {
    let host = host();
    let bridge = CoordinateBridge::new(&host, host.main_series());
    let candles = window(&[0.0, 40.0]);

    let primitive = ZonePrimitive::new(
        zone(60.0, 40.0, Some(10.0), None),
        ZoneStyle::for_kind(ZoneKind::SupportResistance),
        candles.last_time(),
    );

    let mut surface = DrawSurface::new(800.0, 400.0).expect("surface");
    primitive.draw(&mut surface, &bridge);

    assert_eq!(
        surface.rects[0].right,
        bridge.time_to_x(40.0).expect("clip x")
    );
}

#[test]
fn absent_start_time_anchors_left_edge_at_zero() {
    let host = host();
    let bridge = CoordinateBridge::new(&host, host.main_series());

    let primitive = ZonePrimitive::new(
        zone(60.0, 40.0, None, Some(50.0)),
        ZoneStyle::for_kind(ZoneKind::SupportResistance),
        Some(100.0),
    );

    let mut surface = DrawSurface::new(800.0, 400.0).expect("surface");
    primitive.draw(&mut surface, &bridge);

    assert_eq!(surface.rects[0].left, 0.0);
}

#[test]
fn unresolvable_start_time_anchors_left_edge_at_zero() {
    let host = host();
    let bridge = CoordinateBridge::new(&host, host.main_series());

    // Start precedes the visible time domain, so the host cannot resolve it.
    let primitive = ZonePrimitive::new(
        zone(60.0, 40.0, Some(-50.0), Some(50.0)),
        ZoneStyle::for_kind(ZoneKind::SupportResistance),
        Some(100.0),
    );

    let mut surface = DrawSurface::new(800.0, 400.0).expect("surface");
    primitive.draw(&mut surface, &bridge);

    assert_eq!(surface.rects[0].left, 0.0);
}

#[test]
fn unresolvable_price_bound_skips_rect_but_keeps_other_line() {
    let host = host();
    let bridge = CoordinateBridge::new(&host, host.main_series());

    // Upper bound sits outside the price domain.
    let primitive = ZonePrimitive::new(
        zone(150.0, 40.0, Some(10.0), Some(50.0)),
        ZoneStyle::for_kind(ZoneKind::SupportResistance),
        Some(100.0),
    );

    let mut surface = DrawSurface::new(800.0, 400.0).expect("surface");
    primitive.draw(&mut surface, &bridge);

    assert!(surface.rects.is_empty());
    assert_eq!(surface.lines.len(), 1);
    assert_eq!(
        surface.lines[0].y1,
        bridge.price_to_y(40.0).expect("lower y")
    );
}

#[test]
fn draws_nothing_before_chart_layout() {
    let mut host = host();
    host.set_laid_out(false);
    let bridge = CoordinateBridge::new(&host, host.main_series());

    let primitive = ZonePrimitive::new(
        zone(60.0, 40.0, Some(10.0), Some(50.0)),
        ZoneStyle::for_kind(ZoneKind::SupportResistance),
        Some(100.0),
    );

    let mut surface = DrawSurface::new(800.0, 400.0).expect("surface");
    primitive.draw(&mut surface, &bridge);

    assert!(surface.rects.is_empty());
    assert!(surface.lines.is_empty());
}

#[test]
fn visible_range_narrower_than_candles_governs_right_edge() {
    let mut host = host();
    host.set_time_domain(TimeRange::new(0.0, 50.0));
    let bridge = CoordinateBridge::new(&host, host.main_series());

    let primitive = ZonePrimitive::new(
        zone(60.0, 40.0, Some(10.0), None),
        ZoneStyle::for_kind(ZoneKind::SupportResistance),
        Some(90.0),
    );

    let mut surface = DrawSurface::new(800.0, 400.0).expect("surface");
    primitive.draw(&mut surface, &bridge);

    // Clip time is beyond the visible window, so the visible right edge wins.
    assert_eq!(
        surface.rects[0].right,
        bridge.time_to_x(50.0).expect("visible right x")
    );
}

#[test]
fn axis_labels_format_bounds_to_two_decimals() {
    let host = host();
    let bridge = CoordinateBridge::new(&host, host.main_series());

    let primitive = ZonePrimitive::new(
        zone(60.456, 40.111, Some(10.0), Some(50.0)),
        ZoneStyle::for_kind(ZoneKind::SupportResistance),
        Some(100.0),
    );

    let labels = primitive.price_axis_labels(&bridge);
    assert_eq!(labels.len(), 2);
    assert_eq!(labels[0].text, "60.46");
    assert_eq!(labels[1].text, "40.11");
    assert_eq!(labels[0].y, bridge.price_to_y(60.456).expect("upper y"));
}

#[test]
fn axis_label_y_defaults_to_zero_when_unresolvable() {
    let host = host();
    let bridge = CoordinateBridge::new(&host, host.main_series());

    let primitive = ZonePrimitive::new(
        zone(150.0, 40.0, None, None),
        ZoneStyle::for_kind(ZoneKind::SupportResistance),
        Some(100.0),
    );

    let labels = primitive.price_axis_labels(&bridge);
    assert_eq!(labels[0].y, 0.0);
    assert!(labels[1].y > 0.0);
}

#[test]
fn update_data_swaps_annotation_without_host_interaction() {
    let mut primitive = ZonePrimitive::new(
        zone(60.0, 40.0, Some(10.0), Some(50.0)),
        ZoneStyle::for_kind(ZoneKind::SupportResistance),
        Some(100.0),
    );
    primitive.update_data(zone(70.0, 30.0, None, None));
    assert_eq!(primitive.zone().upper_price, 70.0);
    assert_eq!(primitive.zone().start_time, None);
}
