//! EMG-Filters: fixed-coefficient IIR conditioning for streaming EMG signals
//!
//! This library conditions a raw electromyography sample stream with a
//! cascade of precomputed IIR filters, one output sample per input sample.
//! It features:
//!
//! - A fourth-order anti-hum notch (50/60 Hz mains) ahead of second-order
//!   lowpass and highpass stages, applied in a fixed order
//! - Precomputed coefficient tables for 500 Hz and 1000 Hz sampling
//! - O(1) per-sample cost with no allocation after construction
//! - Per-stage enable flags plus a chain-wide bypass for unsupported
//!   configurations
//!
//! # Quick Start
//!
//! ```rust
//! use emg_filters::{EmgFilterChain, FilterConfig};
//!
//! let config = FilterConfig::default(); // 500 Hz, 50 Hz notch, all stages
//! config.validate().expect("supported configuration");
//!
//! let mut chain = EmgFilterChain::from_config(&config);
//! assert!(!chain.is_bypassed());
//!
//! for raw in [125.0, 123.0, 126.0, 111.0] {
//!     let conditioned = chain.update(raw);
//!     println!("{raw} -> {conditioned}");
//! }
//! ```
//!
//! Chains are single-threaded by design: calls on one chain must be
//! serialized by the caller, while distinct chains share nothing and may
//! run on separate threads.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod error;
pub mod processing;

// Re-export commonly used types for convenience
pub use config::FilterConfig;
pub use error::ConfigError;
pub use processing::{
    BandType, EmgFilterChain, FourthOrderSection, NotchFrequency, SampleRate,
    SecondOrderSection,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "emg-filters");
    }
}
