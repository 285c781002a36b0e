// File: crates/proofchart-core/src/preset.rs
// Summary: Named time-range presets ("All Time", "1y", ...) and their mapping to windows.

use crate::window::Window;

pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresetRange {
    /// Whole series span.
    All,
    /// Trailing duration in millis, anchored at the newest sample.
    Duration(i64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeRangePreset {
    pub label: &'static str,
    pub range: PresetRange,
}

pub const ALL_TIME: &str = "All Time";

pub static TIME_RANGE_PRESETS: [TimeRangePreset; 6] = [
    TimeRangePreset { label: ALL_TIME, range: PresetRange::All },
    TimeRangePreset { label: "1y", range: PresetRange::Duration(365 * DAY_MS) },
    TimeRangePreset { label: "1m", range: PresetRange::Duration(30 * DAY_MS) },
    TimeRangePreset { label: "1w", range: PresetRange::Duration(7 * DAY_MS) },
    TimeRangePreset { label: "3d", range: PresetRange::Duration(3 * DAY_MS) },
    TimeRangePreset { label: "1d", range: PresetRange::Duration(DAY_MS) },
];

pub fn find_preset(label: &str) -> Option<&'static TimeRangePreset> {
    TIME_RANGE_PRESETS.iter().find(|p| p.label == label)
}

/// Window selected by `preset` over a series spanning `[min_ts, max_ts]`.
/// Trailing ranges are clamped so they never start before `min_ts`.
pub fn preset_window(preset: &TimeRangePreset, min_ts: i64, max_ts: i64) -> Window {
    let (lo, hi) = if min_ts <= max_ts { (min_ts, max_ts) } else { (max_ts, min_ts) };
    let start = match preset.range {
        PresetRange::All => lo,
        PresetRange::Duration(ms) => lo.max(hi.saturating_sub(ms)),
    };
    Window::spanning(start, hi)
}
