// src/processing/chain.rs
//! Conditioning chain combining the notch, lowpass and highpass stages

use tracing::{debug, warn};

use crate::config::FilterConfig;
use crate::processing::coefficients::{BandType, NotchFrequency, SampleRate};
use crate::processing::fourth_order::FourthOrderSection;
use crate::processing::second_order::SecondOrderSection;

/// Streaming EMG conditioning chain.
///
/// Applies, in fixed order, an anti-hum notch, a 150 Hz lowpass and a 20 Hz
/// highpass to one scalar sample stream. Each stage can be enabled or
/// disabled independently; a disabled stage passes samples through without
/// touching its state, so re-enabling resumes from the state it last had.
///
/// If the configured sampling rate or notch frequency is unsupported the
/// whole chain comes up in bypass mode and [`update`](Self::update) returns
/// its input unchanged, whatever the stage flags say. Bypass is fixed for
/// the lifetime of the chain; use [`is_bypassed`](Self::is_bypassed) to
/// detect the degraded mode.
///
/// One chain conditions one channel. Instantiate one chain per channel for
/// multi-channel input; chains share no state.
pub struct EmgFilterChain {
    notch: Option<FourthOrderSection>,
    lowpass: Option<SecondOrderSection>,
    highpass: Option<SecondOrderSection>,
    notch_enabled: bool,
    lowpass_enabled: bool,
    highpass_enabled: bool,
    bypass: bool,
    sample_rate: Option<SampleRate>,
    notch_frequency: Option<NotchFrequency>,
}

impl EmgFilterChain {
    /// Build a chain from configuration.
    ///
    /// Never fails: an unsupported sampling rate or notch frequency yields
    /// a bypassed chain instead of an error. Call
    /// [`FilterConfig::validate`] first to reject such configurations up
    /// front. When the configuration is supported, all three stages are
    /// constructed regardless of the enable flags so enabling a stage later
    /// costs nothing.
    pub fn from_config(config: &FilterConfig) -> Self {
        let sample_rate = SampleRate::from_hz(config.sample_rate_hz);
        let notch_frequency = NotchFrequency::from_hz(config.notch_frequency_hz);

        let (notch, lowpass, highpass, bypass) = match (sample_rate, notch_frequency) {
            (Some(rate), Some(notch)) => (
                Some(FourthOrderSection::new(rate, notch)),
                Some(SecondOrderSection::new(BandType::Lowpass, rate)),
                Some(SecondOrderSection::new(BandType::Highpass, rate)),
                false,
            ),
            _ => (None, None, None, true),
        };

        if bypass {
            warn!(
                sample_rate_hz = config.sample_rate_hz,
                notch_frequency_hz = config.notch_frequency_hz,
                "unsupported filter configuration, chain running in bypass"
            );
        } else {
            debug!(
                sample_rate_hz = config.sample_rate_hz,
                notch_frequency_hz = config.notch_frequency_hz,
                notch = config.enable_notch,
                lowpass = config.enable_lowpass,
                highpass = config.enable_highpass,
                "filter chain configured"
            );
        }

        Self {
            notch,
            lowpass,
            highpass,
            notch_enabled: config.enable_notch,
            lowpass_enabled: config.enable_lowpass,
            highpass_enabled: config.enable_highpass,
            bypass,
            sample_rate,
            notch_frequency,
        }
    }

    /// Condition one sample.
    ///
    /// Exactly one output sample per input sample, in stream order. The
    /// recursive stage state assumes strict temporal order and exactly-once
    /// delivery; a dropped or duplicated input permanently skews the state
    /// relative to the true signal history.
    pub fn update(&mut self, input: f64) -> f64 {
        if self.bypass {
            return input;
        }

        let mut output = input;

        if self.notch_enabled {
            if let Some(ref mut notch) = self.notch {
                output = notch.update(output);
            }
        }

        if self.lowpass_enabled {
            if let Some(ref mut lowpass) = self.lowpass {
                output = lowpass.update(output);
            }
        }

        if self.highpass_enabled {
            if let Some(ref mut highpass) = self.highpass {
                output = highpass.update(output);
            }
        }

        output
    }

    /// Whether the chain is running as an identity passthrough because the
    /// configured sampling rate or notch frequency is unsupported.
    pub fn is_bypassed(&self) -> bool {
        self.bypass
    }

    /// Configured sampling rate, if supported.
    pub fn sample_rate(&self) -> Option<SampleRate> {
        self.sample_rate
    }

    /// Configured notch frequency, if supported.
    pub fn notch_frequency(&self) -> Option<NotchFrequency> {
        self.notch_frequency
    }

    /// Whether the anti-hum notch stage is enabled.
    pub fn notch_enabled(&self) -> bool {
        self.notch_enabled
    }

    /// Whether the lowpass stage is enabled.
    pub fn lowpass_enabled(&self) -> bool {
        self.lowpass_enabled
    }

    /// Whether the highpass stage is enabled.
    pub fn highpass_enabled(&self) -> bool {
        self.highpass_enabled
    }

    /// Enable or disable the notch stage.
    ///
    /// Disabling does not reset the stage; re-enabling resumes from the
    /// state frozen at disable time.
    pub fn set_notch_enabled(&mut self, enabled: bool) {
        self.notch_enabled = enabled;
    }

    /// Enable or disable the lowpass stage. State is kept across toggles.
    pub fn set_lowpass_enabled(&mut self, enabled: bool) {
        self.lowpass_enabled = enabled;
    }

    /// Enable or disable the highpass stage. State is kept across toggles.
    pub fn set_highpass_enabled(&mut self, enabled: bool) {
        self.highpass_enabled = enabled;
    }
}
