use approx::assert_relative_eq;
use chart_overlays::core::{CoordinateBridge, CoordinateSource, TimeRange};
use chart_overlays::RecordingHost;

fn host() -> RecordingHost {
    RecordingHost::new(800.0, 400.0, TimeRange::new(0.0, 100.0), (0.0, 200.0)).expect("host")
}

#[test]
fn maps_domain_values_linearly_into_pixels() {
    let host = host();
    let bridge = CoordinateBridge::new(&host, host.main_series());

    assert_relative_eq!(bridge.time_to_x(0.0).expect("x"), 0.0);
    assert_relative_eq!(bridge.time_to_x(50.0).expect("x"), 400.0);
    assert_relative_eq!(bridge.time_to_x(100.0).expect("x"), 800.0);

    // Pixel y grows downward.
    assert_relative_eq!(bridge.price_to_y(200.0).expect("y"), 0.0);
    assert_relative_eq!(bridge.price_to_y(0.0).expect("y"), 400.0);
    assert_relative_eq!(bridge.price_to_y(100.0).expect("y"), 200.0);
}

#[test]
fn out_of_domain_queries_resolve_to_none() {
    let host = host();
    let bridge = CoordinateBridge::new(&host, host.main_series());

    assert_eq!(bridge.time_to_x(-1.0), None);
    assert_eq!(bridge.time_to_x(101.0), None);
    assert_eq!(bridge.price_to_y(-0.5), None);
    assert_eq!(bridge.price_to_y(200.5), None);
    assert_eq!(bridge.time_to_x(f64::NAN), None);
}

#[test]
fn nothing_resolves_before_first_layout() {
    let mut host = host();
    host.set_laid_out(false);
    let bridge = CoordinateBridge::new(&host, host.main_series());

    assert_eq!(bridge.time_to_x(50.0), None);
    assert_eq!(bridge.price_to_y(100.0), None);
    assert_eq!(bridge.visible_time_range(), None);
}

#[test]
fn reflects_live_scale_changes_without_caching() {
    let mut host = host();
    {
        let bridge = CoordinateBridge::new(&host, host.main_series());
        assert_relative_eq!(bridge.time_to_x(50.0).expect("x"), 400.0);
    }

    // A pan halves the visible window; the next query sees the new scale.
    host.set_time_domain(TimeRange::new(0.0, 50.0));
    let bridge = CoordinateBridge::new(&host, host.main_series());
    assert_relative_eq!(bridge.time_to_x(50.0).expect("x"), 800.0);
    assert_eq!(bridge.time_to_x(75.0), None);

    let range = bridge.visible_time_range().expect("range");
    assert_relative_eq!(range.from, 0.0);
    assert_relative_eq!(range.to, 50.0);
}

#[test]
fn time_range_normalizes_and_clamps() {
    let range = TimeRange::new(80.0, 20.0);
    assert_eq!(range.from, 20.0);
    assert_eq!(range.to, 80.0);
    assert!(range.contains(20.0));
    assert!(range.contains(80.0));
    assert!(!range.contains(19.9));
    assert_relative_eq!(range.clamp(100.0), 80.0);
    assert_relative_eq!(range.clamp(50.0), 50.0);
}
