// File: crates/proofchart-core/src/axis.rs
// Summary: Y-axis domain and tick layout derived from the visible channel values.

use crate::display::DisplayPoint;
use crate::sample::VisibleChannels;

/// Range thresholds (inclusive upper bound) mapped to tick spacing.
const TICK_STEPS: [(f64, f64); 6] = [
    (100.0, 10.0),
    (500.0, 50.0),
    (1_000.0, 100.0),
    (1_600.0, 200.0),
    (3_500.0, 500.0),
    (10_000.0, 1_000.0),
];
const WIDEST_TICK: f64 = 2_000.0;
/// Upper bound on generated ticks; wider domains only get their two endpoints.
pub const MAX_TICKS: usize = 1_000;

/// Tick spacing for a visible value range; first matching bucket wins.
pub fn tick_interval_for(range: f64) -> f64 {
    TICK_STEPS
        .iter()
        .find(|(limit, _)| range <= *limit)
        .map(|&(_, step)| step)
        .unwrap_or(WIDEST_TICK)
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisSpec {
    pub domain_low: f64,
    pub domain_high: f64,
    /// Ascending, evenly spaced, first == domain_low, last == domain_high.
    pub ticks: Vec<f64>,
}

impl AxisSpec {
    /// Spacing between adjacent ticks (the full span when there is a single tick).
    pub fn tick_interval(&self) -> f64 {
        match self.ticks.as_slice() {
            [a, b, ..] => b - a,
            _ => self.domain_high - self.domain_low,
        }
    }
}

impl Default for AxisSpec {
    fn default() -> Self {
        Self { domain_low: 0.0, domain_high: 1_000.0, ticks: vec![0.0, 500.0, 1_000.0] }
    }
}

fn ticks_between(low: f64, high: f64, interval: f64) -> Vec<f64> {
    let steps = ((high - low) / interval).round();
    if !(0.0..MAX_TICKS as f64).contains(&steps) {
        return vec![low, high];
    }
    (0..=steps as usize).map(|i| low + interval * i as f64).collect()
}

/// Domain and ticks covering every visible, present value in `points`.
/// Non-finite values are ignored. Falls back to `AxisSpec::default()` when
/// nothing finite is visible.
pub fn compute_axis_spec(points: &[DisplayPoint], visible: VisibleChannels) -> AxisSpec {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    let mut any = false;
    for p in points {
        for v in visible.iter().filter_map(|c| p.value(c)).filter(|v| v.is_finite()) {
            lo = lo.min(v);
            hi = hi.max(v);
            any = true;
        }
    }
    if !any {
        return AxisSpec::default();
    }

    let interval = tick_interval_for(hi - lo);
    let mut domain_low = (lo / interval).floor() * interval;
    let mut domain_high = (hi / interval).ceil() * interval;
    if domain_low == domain_high {
        // never widen a non-negative domain below zero
        domain_low = if domain_low >= 0.0 {
            (domain_low - interval).max(0.0)
        } else {
            domain_low - interval
        };
        domain_high += interval;
    }
    if !domain_low.is_finite() || !domain_high.is_finite() {
        return AxisSpec::default();
    }
    log::debug!("axis values [{lo}, {hi}] -> domain [{domain_low}, {domain_high}] step {interval}");

    AxisSpec { domain_low, domain_high, ticks: ticks_between(domain_low, domain_high, interval) }
}
