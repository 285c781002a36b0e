// File: crates/proofchart-core/src/view.rs
// Headless view state: selected window, active preset and visible channels over one series.

use crate::axis::{compute_axis_spec, AxisSpec};
use crate::display::{format_date, DisplayPoint};
use crate::error::ChartError;
use crate::preset::{find_preset, preset_window, ALL_TIME};
use crate::sample::{Channel, Series, VisibleChannels};
use crate::settings::ChartSettings;
use crate::window::{window_series, Window};

/// What the presentation layer should show instead of (or as) the chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartStatus {
    /// The series has no samples at all.
    NoData,
    /// The window contains no points.
    EmptyWindow,
    /// Every channel is hidden.
    NoChannels,
    Ready,
}

impl ChartStatus {
    pub fn message(self) -> Option<&'static str> {
        match self {
            ChartStatus::NoData => Some("No data to display."),
            ChartStatus::EmptyWindow => Some("No data in selected time range."),
            ChartStatus::NoChannels => Some("No lines selected."),
            ChartStatus::Ready => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ViewState {
    series: Series,
    window: Window,
    active_preset: Option<&'static str>,
    /// Manual windows snap to `min_timestamp + k * step`.
    step_ms: i64,
    pub visible: VisibleChannels,
}

impl ViewState {
    /// Starts on "All Time" with both channels visible. Manual windows are
    /// kept at millisecond resolution.
    pub fn new(series: Series) -> Self {
        let window = series.full_window().unwrap_or(Window::spanning(0, 0));
        Self { series, window, active_preset: Some(ALL_TIME), step_ms: 1, visible: VisibleChannels::all() }
    }

    /// Like `new`, snapping manual windows to `settings.slider_step_ms`.
    pub fn with_settings(series: Series, settings: &ChartSettings) -> Result<Self, ChartError> {
        settings.validate()?;
        let mut view = Self::new(series);
        view.step_ms = settings.slider_step_ms;
        Ok(view)
    }

    pub fn series(&self) -> &Series { &self.series }
    pub fn window(&self) -> Window { self.window }
    pub fn active_preset(&self) -> Option<&'static str> { self.active_preset }

    fn bounds(&self) -> Result<(i64, i64), ChartError> {
        match (self.series.min_timestamp(), self.series.max_timestamp()) {
            (Some(lo), Some(hi)) => Ok((lo, hi)),
            _ => Err(ChartError::EmptySeries),
        }
    }

    pub fn apply_preset(&mut self, label: &str) -> Result<(), ChartError> {
        let preset = find_preset(label).ok_or_else(|| ChartError::UnknownPreset(label.to_string()))?;
        let (lo, hi) = self.bounds()?;
        self.window = preset_window(preset, lo, hi);
        self.active_preset = Some(preset.label);
        log::debug!("preset '{}' -> [{}, {}]", preset.label, self.window.start(), self.window.end());
        Ok(())
    }

    /// Manual selection (slider drag). Clamped to the series span and snapped
    /// to the slider step; clears the active preset.
    pub fn set_window(&mut self, start: i64, end: i64) -> Result<(), ChartError> {
        let window = Window::new(start, end)?;
        let (lo, hi) = self.bounds()?;
        let window = window.clamp_to(lo, hi);
        let (start, end) = (self.snap(window.start(), lo, hi), self.snap(window.end(), lo, hi));
        self.window = Window::spanning(start, end);
        self.active_preset = None;
        log::debug!("manual window [{start}, {end}]");
        Ok(())
    }

    /// Nearest `min + k * step` (ties round up), never past the newest sample.
    fn snap(&self, ts: i64, lo: i64, hi: i64) -> i64 {
        let step = i128::from(self.step_ms);
        let offset = i128::from(ts) - i128::from(lo);
        let snapped = i128::from(lo) + (offset + step / 2) / step * step;
        // bounded by hi, so the narrowing cast is lossless
        snapped.min(i128::from(hi)) as i64
    }

    pub fn set_channel(&mut self, channel: Channel, on: bool) { self.visible.set(channel, on); }
    pub fn toggle_channel(&mut self, channel: Channel) { self.visible.toggle(channel); }

    pub fn points(&self) -> Vec<DisplayPoint> { window_series(&self.series, self.window) }

    pub fn axis(&self) -> AxisSpec { compute_axis_spec(&self.points(), self.visible) }

    pub fn status(&self) -> ChartStatus {
        if self.series.is_empty() {
            ChartStatus::NoData
        } else if self.points().is_empty() {
            ChartStatus::EmptyWindow
        } else if self.visible.is_empty() {
            ChartStatus::NoChannels
        } else {
            ChartStatus::Ready
        }
    }

    /// Slider caption, e.g. `2024-01-01 - 2024-02-01`.
    pub fn range_label(&self) -> String {
        format!("{} - {}", format_date(self.window.start()), format_date(self.window.end()))
    }
}
