// src/error.rs
//! Error types for configuration loading and validation
//!
//! The filter chain itself never fails at runtime: unsupported
//! configurations degrade to bypass (see
//! [`EmgFilterChain`](crate::processing::EmgFilterChain)). Errors only
//! arise when loading or validating configuration up front.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Sampling rate outside the supported set.
    #[error("unsupported sample rate: {0} Hz (supported: 500, 1000)")]
    UnsupportedSampleRate(u32),

    /// Notch frequency outside the supported set.
    #[error("unsupported notch frequency: {0} Hz (supported: 50, 60)")]
    UnsupportedNotchFrequency(u32),

    /// Configuration file could not be read.
    #[error("failed to read configuration file {path}")]
    Io {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file was not valid TOML.
    #[error("failed to parse configuration")]
    Parse(#[from] toml::de::Error),
}
