// src/config/mod.rs
//! Filter chain configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::processing::coefficients::{NotchFrequency, SampleRate};

/// Construction-time configuration for an
/// [`EmgFilterChain`](crate::processing::EmgFilterChain).
///
/// Sampling rate and notch frequency are carried as raw Hz values so that
/// unsupported settings can be represented; the chain maps them onto
/// [`SampleRate`] and [`NotchFrequency`] and falls back to bypass when the
/// mapping fails. [`validate`](Self::validate) performs the same mapping
/// eagerly for callers that want a hard error instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Sampling rate of the incoming stream in Hz. Supported: 500, 1000.
    #[serde(default = "defaults::sample_rate_hz")]
    pub sample_rate_hz: u32,

    /// Mains frequency targeted by the anti-hum notch in Hz.
    /// Supported: 50, 60.
    #[serde(default = "defaults::notch_frequency_hz")]
    pub notch_frequency_hz: u32,

    /// Enable the fourth-order anti-hum notch stage.
    #[serde(default = "defaults::enabled")]
    pub enable_notch: bool,

    /// Enable the second-order lowpass stage (150 Hz cutoff).
    #[serde(default = "defaults::enabled")]
    pub enable_lowpass: bool,

    /// Enable the second-order highpass stage (20 Hz cutoff).
    #[serde(default = "defaults::enabled")]
    pub enable_highpass: bool,
}

mod defaults {
    pub fn sample_rate_hz() -> u32 {
        500
    }

    pub fn notch_frequency_hz() -> u32 {
        50
    }

    pub fn enabled() -> bool {
        true
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: defaults::sample_rate_hz(),
            notch_frequency_hz: defaults::notch_frequency_hz(),
            enable_notch: true,
            enable_lowpass: true,
            enable_highpass: true,
        }
    }
}

impl FilterConfig {
    /// Check that the configured rate and notch frequency are supported.
    ///
    /// A chain built from a configuration that fails validation still
    /// constructs, but runs as an identity passthrough.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if SampleRate::from_hz(self.sample_rate_hz).is_none() {
            return Err(ConfigError::UnsupportedSampleRate(self.sample_rate_hz));
        }
        if NotchFrequency::from_hz(self.notch_frequency_hz).is_none() {
            return Err(ConfigError::UnsupportedNotchFrequency(
                self.notch_frequency_hz,
            ));
        }
        Ok(())
    }

    /// Parse a configuration from a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load a configuration from a TOML file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}
