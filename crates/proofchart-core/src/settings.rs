// File: crates/proofchart-core/src/settings.rs
// Summary: Chart configuration (channel legend/colours, slider step, default preset).

use serde::Deserialize;

use crate::error::ChartError;
use crate::preset::{ALL_TIME, DAY_MS};
use crate::sample::Channel;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChannelStyle {
    pub label: String,
    /// CSS-style hex colour, e.g. `#22c55e`.
    pub color: String,
}

impl ChannelStyle {
    fn new(label: &str, color: &str) -> Self {
        Self { label: label.to_string(), color: color.to_string() }
    }
}

/// Contract: `slider_step_ms > 0`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub proven: ChannelStyle,
    pub disproven: ChannelStyle,
    pub slider_step_ms: i64,
    pub default_preset: String,
}

impl ChartSettings {
    pub fn style(&self, channel: Channel) -> &ChannelStyle {
        match channel {
            Channel::Proven => &self.proven,
            Channel::Disproven => &self.disproven,
        }
    }

    /// Parse settings from JSON; absent fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, ChartError> {
        let settings: Self = serde_json::from_str(text).map_err(|e| ChartError::Settings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        if self.slider_step_ms <= 0 {
            return Err(ChartError::InvalidSliderStep(self.slider_step_ms));
        }
        Ok(())
    }
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            proven: ChannelStyle::new(Channel::Proven.label(), "#22c55e"),
            disproven: ChannelStyle::new(Channel::Disproven.label(), "#ef4444"),
            slider_step_ms: DAY_MS,
            default_preset: ALL_TIME.to_string(),
        }
    }
}
