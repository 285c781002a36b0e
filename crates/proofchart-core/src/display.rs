// File: crates/proofchart-core/src/display.rs
// Summary: Display-ready points with formatted date strings (UTC, chrono).

use chrono::{DateTime, Utc};

use crate::sample::{Channel, Sample};

const DATE_FMT: &str = "%Y-%m-%d";
const FULL_DATE_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// A sample ready for plotting. `date`/`full_date` are cosmetic.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayPoint {
    pub timestamp: i64,
    pub date: String,
    pub full_date: String,
    pub proven: Option<f64>,
    pub disproven: Option<f64>,
}

impl DisplayPoint {
    pub fn value(&self, channel: Channel) -> Option<f64> {
        match channel {
            Channel::Proven => self.proven,
            Channel::Disproven => self.disproven,
        }
    }
}

impl From<Sample> for DisplayPoint {
    fn from(s: Sample) -> Self {
        Self {
            timestamp: s.timestamp,
            date: format_date(s.timestamp),
            full_date: format_full_date(s.timestamp),
            proven: s.proven,
            disproven: s.disproven,
        }
    }
}

fn format_with(ts: i64, fmt: &str) -> String {
    match DateTime::<Utc>::from_timestamp_millis(ts) {
        Some(dt) => dt.format(fmt).to_string(),
        // out of chrono's range; fall back to raw millis
        None => ts.to_string(),
    }
}

/// Calendar date of an epoch-millis timestamp, e.g. `2024-03-01`.
pub fn format_date(ts: i64) -> String { format_with(ts, DATE_FMT) }

/// Date and time of an epoch-millis timestamp, e.g. `2024-03-01 12:30:00`.
pub fn format_full_date(ts: i64) -> String { format_with(ts, FULL_DATE_FMT) }
