//! Emitter configuration and threshold resolution

use serde::{Deserialize, Serialize};

use crate::format::ColorMode;
use crate::severity::Severity;

use super::traits::{ConfigResult, ConfigSource, LOG_LEVEL_KEY};

/// Threshold used when none is configured or the configured one is invalid
pub const DEFAULT_THRESHOLD: Severity = Severity::Info;

/// Settings an emitter is built from
///
/// Passed explicitly to the emitter; there is no process-wide config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    /// Raw minimum severity, validated when the emitter is built
    pub log_level: Option<String>,

    /// Whether formatted messages carry ANSI color codes
    #[serde(skip)]
    pub color: ColorMode,
}

impl EmitterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// Read `log_level` from a source
    pub fn from_source(source: &dyn ConfigSource) -> ConfigResult<Self> {
        Ok(Self {
            log_level: source.get(LOG_LEVEL_KEY)?,
            ..Self::default()
        })
    }

    pub fn resolve_threshold(&self) -> ThresholdResolution {
        ThresholdResolution::resolve(self.log_level.as_deref())
    }
}

/// Outcome of validating a configured level
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThresholdResolution {
    /// A recognized severity name
    Configured(Severity),
    /// No value configured
    Missing,
    /// A value that names no severity; carries the raw text
    Invalid(String),
}

impl ThresholdResolution {
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw {
            None => ThresholdResolution::Missing,
            Some(value) => match value.parse::<Severity>() {
                Ok(level) => ThresholdResolution::Configured(level),
                Err(_) => ThresholdResolution::Invalid(value.to_string()),
            },
        }
    }

    /// Effective threshold
    pub fn severity(&self) -> Severity {
        match self {
            ThresholdResolution::Configured(level) => *level,
            ThresholdResolution::Missing | ThresholdResolution::Invalid(_) => DEFAULT_THRESHOLD,
        }
    }
}
