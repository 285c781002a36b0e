// File: crates/proofchart-core/src/sample.rs
// Summary: Sample/Series model for the proven and disproven channels.
// Notes:
// - A `Series` is built once from raw samples and is read-only afterwards.
//   Empty samples (both channels absent) are dropped at construction.

use serde::{Deserialize, Serialize};

use crate::window::Window;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Proven,
    Disproven,
}

impl Channel {
    pub const ALL: [Channel; 2] = [Channel::Proven, Channel::Disproven];

    /// Human readable legend label.
    pub fn label(self) -> &'static str {
        match self {
            Channel::Proven => "Proven",
            Channel::Disproven => "Disproven",
        }
    }

    /// Field name used in data files.
    pub fn key(self) -> &'static str {
        match self {
            Channel::Proven => "proven",
            Channel::Disproven => "disproven",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key().eq_ignore_ascii_case(key))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Epoch milliseconds.
    pub timestamp: i64,
    #[serde(default)]
    pub proven: Option<f64>,
    #[serde(default)]
    pub disproven: Option<f64>,
}

impl Sample {
    pub const fn new(timestamp: i64, proven: Option<f64>, disproven: Option<f64>) -> Self {
        Self { timestamp, proven, disproven }
    }

    pub fn value(&self, channel: Channel) -> Option<f64> {
        match channel {
            Channel::Proven => self.proven,
            Channel::Disproven => self.disproven,
        }
    }

    /// True when neither channel carries a value.
    pub fn is_empty(&self) -> bool {
        self.proven.is_none() && self.disproven.is_none()
    }
}

/// Channels currently enabled for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleChannels {
    pub proven: bool,
    pub disproven: bool,
}

impl VisibleChannels {
    pub const fn all() -> Self { Self { proven: true, disproven: true } }
    pub const fn none() -> Self { Self { proven: false, disproven: false } }

    pub fn only(channel: Channel) -> Self {
        let mut v = Self::none();
        v.set(channel, true);
        v
    }

    pub fn contains(&self, channel: Channel) -> bool {
        match channel {
            Channel::Proven => self.proven,
            Channel::Disproven => self.disproven,
        }
    }

    pub fn set(&mut self, channel: Channel, on: bool) {
        match channel {
            Channel::Proven => self.proven = on,
            Channel::Disproven => self.disproven = on,
        }
    }

    pub fn toggle(&mut self, channel: Channel) {
        let on = self.contains(channel);
        self.set(channel, !on);
    }

    pub fn is_empty(&self) -> bool { !self.proven && !self.disproven }

    pub fn iter(&self) -> impl Iterator<Item = Channel> + '_ {
        Channel::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl Default for VisibleChannels {
    fn default() -> Self { Self::all() }
}

/// Ascending-by-timestamp sequence of non-empty samples.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    /// Treat non-finite values as absent, drop empty samples and stable-sort
    /// the rest by timestamp.
    pub fn from_samples<I: IntoIterator<Item = Sample>>(raw: I) -> Self {
        let mut samples: Vec<Sample> = raw
            .into_iter()
            .map(|s| Sample {
                proven: s.proven.filter(|v| v.is_finite()),
                disproven: s.disproven.filter(|v| v.is_finite()),
                ..s
            })
            .filter(|s| !s.is_empty())
            .collect();
        samples.sort_by_key(|s| s.timestamp);
        Self { samples }
    }

    pub fn samples(&self) -> &[Sample] { &self.samples }
    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }

    pub fn min_timestamp(&self) -> Option<i64> { self.samples.first().map(|s| s.timestamp) }
    pub fn max_timestamp(&self) -> Option<i64> { self.samples.last().map(|s| s.timestamp) }

    /// Window spanning the whole series, `None` when empty.
    pub fn full_window(&self) -> Option<Window> {
        match (self.min_timestamp(), self.max_timestamp()) {
            (Some(lo), Some(hi)) => Some(Window::spanning(lo, hi)),
            _ => None,
        }
    }
}

impl FromIterator<Sample> for Series {
    fn from_iter<T: IntoIterator<Item = Sample>>(iter: T) -> Self {
        Self::from_samples(iter)
    }
}
