// File: crates/proofchart-core/src/lib.rs
// Summary: Core library entry point; exports windowing, axis scaling, presets and view state.

pub mod error;
pub mod sample;
pub mod display;
pub mod window;
pub mod axis;
pub mod preset;
pub mod settings;
pub mod view;

pub use error::ChartError;
pub use sample::{Channel, Sample, Series, VisibleChannels};
pub use display::DisplayPoint;
pub use window::{interpolate, window_series, window_series_checked, Window};
pub use axis::{compute_axis_spec, tick_interval_for, AxisSpec};
pub use preset::{find_preset, preset_window, PresetRange, TimeRangePreset, TIME_RANGE_PRESETS};
pub use settings::{ChannelStyle, ChartSettings};
pub use view::{ChartStatus, ViewState};
