// File: crates/proofchart-core/tests/view_state.rs
// Purpose: Validate headless view state transitions (presets, manual window, channel toggles, status).

use proofchart_core::preset::DAY_MS;
use proofchart_core::{Channel, ChartError, ChartSettings, ChartStatus, Sample, Series, ViewState};

fn daily(days: i64) -> Series {
    (0..=days)
        .map(|d| Sample::new(d * DAY_MS, Some(100.0 + d as f64 * 10.0), Some(50.0)))
        .collect()
}

#[test]
fn starts_on_all_time_with_every_channel() {
    let view = ViewState::new(daily(10));
    assert_eq!(view.active_preset(), Some("All Time"));
    assert_eq!((view.window().start(), view.window().end()), (0, 10 * DAY_MS));
    assert_eq!(view.points().len(), 11);
    assert_eq!(view.status(), ChartStatus::Ready);
}

#[test]
fn preset_then_manual_window_clears_preset() {
    let mut view = ViewState::new(daily(10));
    view.apply_preset("3d").expect("known preset");
    assert_eq!(view.active_preset(), Some("3d"));
    assert_eq!(view.points().len(), 4);

    view.set_window(-5 * DAY_MS, 2 * DAY_MS + DAY_MS / 2).expect("ordered");
    assert_eq!(view.active_preset(), None);
    assert_eq!(view.window().start(), 0, "start clamped to series");
    let pts = view.points();
    assert_eq!(pts.len(), 4);
    let last = pts.last().expect("points");
    assert_eq!(last.timestamp, 2 * DAY_MS + DAY_MS / 2);
    assert!((last.proven.expect("interpolated") - 125.0).abs() < 1e-9);
}

#[test]
fn bad_inputs_are_reported() {
    let mut view = ViewState::new(daily(3));
    assert_eq!(view.apply_preset("6h"), Err(ChartError::UnknownPreset("6h".into())));
    assert_eq!(view.set_window(5, 1), Err(ChartError::InvertedWindow { start: 5, end: 1 }));

    let mut empty = ViewState::new(Series::default());
    assert_eq!(empty.status(), ChartStatus::NoData);
    assert_eq!(empty.apply_preset("1d"), Err(ChartError::EmptySeries));
}

#[test]
fn channel_toggles_drive_axis_and_status() {
    let mut view = ViewState::new(daily(10));
    // proven 100..200, disproven flat 50
    let both = view.axis();
    assert_eq!((both.domain_low, both.domain_high), (50.0, 200.0));

    view.set_channel(Channel::Proven, false);
    let flat = view.axis();
    assert_eq!((flat.domain_low, flat.domain_high), (40.0, 60.0));

    view.toggle_channel(Channel::Disproven);
    assert_eq!(view.status(), ChartStatus::NoChannels);
    assert_eq!(view.status().message(), Some("No lines selected."));
}

#[test]
fn range_label_and_degenerate_windows() {
    let series = Series::from_samples(vec![Sample::new(0, Some(1.0), None), Sample::new(10 * DAY_MS, Some(2.0), None)]);
    let mut view = ViewState::new(series);
    assert_eq!(view.range_label(), "1970-01-01 - 1970-01-11");
    view.set_window(0, 0).expect("ordered");
    assert_eq!(view.status(), ChartStatus::Ready);
    view.set_window(10 * DAY_MS, 10 * DAY_MS).expect("ordered");
    assert_eq!(view.points().len(), 1);
}

#[test]
fn settings_defaults_and_partial_json() {
    let defaults = ChartSettings::default();
    assert_eq!(defaults.style(Channel::Proven).color, "#22c55e");
    assert_eq!(defaults.style(Channel::Disproven).color, "#ef4444");
    assert_eq!(defaults.slider_step_ms, DAY_MS);

    let custom = ChartSettings::from_json(r#"{ "default_preset": "1w" }"#).expect("valid json");
    assert_eq!(custom.default_preset, "1w");
    assert_eq!(custom.proven, defaults.proven);
}

#[test]
fn manual_window_snaps_to_slider_step() {
    let view_settings = ChartSettings::default();
    let mut view = ViewState::with_settings(daily(10), &view_settings).expect("valid settings");
    view.set_window(DAY_MS / 3, 2 * DAY_MS + 6 * DAY_MS / 10).expect("ordered");
    assert_eq!((view.window().start(), view.window().end()), (0, 3 * DAY_MS));
    assert_eq!(view.points().len(), 4);
    assert_eq!(view.active_preset(), None);

    // snapping never runs past the newest sample
    view.set_window(9 * DAY_MS + DAY_MS / 2, 10 * DAY_MS).expect("ordered");
    assert_eq!((view.window().start(), view.window().end()), (10 * DAY_MS, 10 * DAY_MS));
}

#[test]
fn non_positive_slider_step_is_rejected() {
    let mut settings = ChartSettings::default();
    settings.slider_step_ms = 0;
    assert_eq!(ViewState::with_settings(daily(2), &settings).err(), Some(ChartError::InvalidSliderStep(0)));

    assert_eq!(
        ChartSettings::from_json(r#"{ "slider_step_ms": -5 }"#),
        Err(ChartError::InvalidSliderStep(-5))
    );
    assert!(matches!(ChartSettings::from_json("{ not json"), Err(ChartError::Settings(_))));
}
