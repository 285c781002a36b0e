// File: crates/proofchart-core/src/error.rs
// Summary: Error type shared by the windowing, preset and view APIs.

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("window start {start} is after window end {end}")]
    InvertedWindow { start: i64, end: i64 },
    #[error("unknown time range preset '{0}'")]
    UnknownPreset(String),
    #[error("series has no samples")]
    EmptySeries,
    #[error("slider step must be positive, got {0} ms")]
    InvalidSliderStep(i64),
    #[error("invalid settings: {0}")]
    Settings(String),
}
