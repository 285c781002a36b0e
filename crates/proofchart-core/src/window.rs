// File: crates/proofchart-core/src/window.rs
// Summary: Time window model and clipping of a series to a window with boundary interpolation.

use crate::display::DisplayPoint;
use crate::error::ChartError;
use crate::sample::{Sample, Series};

/// Closed timestamp interval `[start, end]` in epoch millis.
/// Contract: `start <= end`, enforced by `Window::new`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Window {
    start: i64,
    end: i64,
}

impl Window {
    pub fn new(start: i64, end: i64) -> Result<Self, ChartError> {
        if start > end {
            return Err(ChartError::InvertedWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Smallest window containing both timestamps, in either order.
    pub fn spanning(a: i64, b: i64) -> Self {
        Self { start: a.min(b), end: a.max(b) }
    }

    pub const fn start(&self) -> i64 { self.start }
    pub const fn end(&self) -> i64 { self.end }
    pub const fn span(&self) -> i64 { self.end.saturating_sub(self.start) }

    pub fn contains(&self, ts: i64) -> bool { ts >= self.start && ts <= self.end }

    /// Clamp both bounds into `[lo, hi]`; ordering is preserved.
    pub fn clamp_to(self, lo: i64, hi: i64) -> Self {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        Self { start: self.start.clamp(lo, hi), end: self.end.clamp(lo, hi) }
    }
}

/// Linear interpolation of a nullable channel value at `target_x`.
/// An absent value on either side propagates as absent.
pub fn interpolate(target_x: i64, x1: i64, y1: Option<f64>, x2: i64, y2: Option<f64>) -> Option<f64> {
    let (y1, y2) = (y1?, y2?);
    if x1 == x2 {
        return Some(y1);
    }
    // widen before subtracting; far-apart timestamps overflow i64
    let t = (target_x as i128 - x1 as i128) as f64 / (x2 as i128 - x1 as i128) as f64;
    Some(y1 + (y2 - y1) * t)
}

fn synthesize(at: i64, a: &Sample, b: &Sample) -> Sample {
    Sample {
        timestamp: at,
        proven: interpolate(at, a.timestamp, a.proven, b.timestamp, b.proven),
        disproven: interpolate(at, a.timestamp, a.disproven, b.timestamp, b.disproven),
    }
}

/// Clip `series` to `window`, synthesizing points at the window edges when
/// they fall between two samples. Output is ascending by timestamp.
pub fn window_series(series: &Series, window: Window) -> Vec<DisplayPoint> {
    let data = series.samples();
    let (start, end) = (window.start, window.end);

    // index of first sample with ts >= start / first with ts > end
    let at_or_after_start = data.partition_point(|s| s.timestamp < start);
    let after_end = data.partition_point(|s| s.timestamp <= end);

    let mut out: Vec<Sample> = Vec::new();

    // start boundary
    let before_start = at_or_after_start.checked_sub(1).map(|i| &data[i]);
    match (before_start, data.get(at_or_after_start)) {
        (Some(before), Some(first)) if first.timestamp > start => out.push(synthesize(start, before, first)),
        (_, Some(first)) if first.timestamp == start => out.push(*first),
        _ => {}
    }

    // interior, strictly inside
    out.extend(
        data[at_or_after_start..after_end]
            .iter()
            .filter(|s| s.timestamp > start && s.timestamp < end)
            .copied(),
    );

    // end boundary
    let last_before_end = after_end.checked_sub(1).map(|i| &data[i]);
    match (last_before_end, data.get(after_end)) {
        (Some(last), Some(after)) if last.timestamp < end => out.push(synthesize(end, last, after)),
        (Some(last), _) if last.timestamp == end => {
            if out.last().map_or(true, |p| p.timestamp != end) {
                out.push(*last);
            }
        }
        _ => {}
    }

    out.sort_by_key(|s| s.timestamp);
    log::trace!("window [{start}, {end}] -> {} points", out.len());
    out.into_iter().map(DisplayPoint::from).collect()
}

/// Like `window_series`, taking raw bounds and rejecting `start > end`.
pub fn window_series_checked(series: &Series, start: i64, end: i64) -> Result<Vec<DisplayPoint>, ChartError> {
    Ok(window_series(series, Window::new(start, end)?))
}
