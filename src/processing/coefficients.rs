// src/processing/coefficients.rs
//! Fixed filter coefficient tables for the supported sampling configurations
//!
//! All coefficients were designed offline and are stored as plain constant
//! tables indexed by the enumerated keys below. Adding a sampling rate is a
//! data change, not a logic change.

use serde::{Deserialize, Serialize};

/// Supported sampling rates for the conditioning filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SampleRate {
    /// 500 samples per second
    Hz500,
    /// 1000 samples per second
    Hz1000,
}

/// Supported mains interference frequencies for the anti-hum filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotchFrequency {
    /// 50 Hz mains (most of the world)
    Hz50,
    /// 60 Hz mains (Americas, parts of Asia)
    Hz60,
}

/// Frequency band selected by a second-order section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandType {
    /// 150 Hz cutoff lowpass
    Lowpass,
    /// 20 Hz cutoff highpass
    Highpass,
}

impl SampleRate {
    /// Map a raw rate in Hz onto the supported set.
    pub fn from_hz(hz: u32) -> Option<Self> {
        match hz {
            500 => Some(SampleRate::Hz500),
            1000 => Some(SampleRate::Hz1000),
            _ => None,
        }
    }

    /// Rate in samples per second.
    pub fn hz(self) -> u32 {
        match self {
            SampleRate::Hz500 => 500,
            SampleRate::Hz1000 => 1000,
        }
    }

    fn index(self) -> usize {
        match self {
            SampleRate::Hz500 => 0,
            SampleRate::Hz1000 => 1,
        }
    }
}

impl NotchFrequency {
    /// Map a raw mains frequency in Hz onto the supported set.
    pub fn from_hz(hz: u32) -> Option<Self> {
        match hz {
            50 => Some(NotchFrequency::Hz50),
            60 => Some(NotchFrequency::Hz60),
            _ => None,
        }
    }

    /// Frequency in Hz.
    pub fn hz(self) -> u32 {
        match self {
            NotchFrequency::Hz50 => 50,
            NotchFrequency::Hz60 => 60,
        }
    }
}

// 2nd order Butterworth lowpass, 150 Hz cutoff, indexed by sample rate
const LPF_NUMERATOR: [[f64; 3]; 2] = [
    [0.3913, 0.7827, 0.3913],
    [0.1311, 0.2622, 0.1311],
];
const LPF_DENOMINATOR: [[f64; 3]; 2] = [
    [0.3913, 0.7827, 0.3913],
    [1.0000, -0.7478, 0.2722],
];

// 2nd order Butterworth highpass, 20 Hz cutoff, indexed by sample rate
const HPF_NUMERATOR: [[f64; 3]; 2] = [
    [0.8371, -1.6742, 0.8371],
    [0.9150, -1.8299, 0.9150],
];
const HPF_DENOMINATOR: [[f64; 3]; 2] = [
    [1.0000, -1.6475, 0.7009],
    [1.0000, -1.8227, 0.8372],
];

// 4th order anti-hum notch, two concatenated biquad coefficient triples per
// row; den[0] and den[3] are normalized to 1.0 and unused by the recursion.
const AHF_NUMERATOR_50HZ: [[f64; 6]; 2] = [
    [0.9522, -1.5407, 0.9522, 0.8158, -0.8045, 0.0855],
    [0.5869, -1.1146, 0.5869, 1.0499, -2.0000, 1.0499],
];
const AHF_DENOMINATOR_50HZ: [[f64; 6]; 2] = [
    [1.0000, -1.5395, 0.9056, 1.0000, -1.1187, 0.3129],
    [1.0000, -1.8844, 0.9893, 1.0000, -1.8991, 0.9892],
];
const AHF_OUTPUT_GAIN_50HZ: [f64; 2] = [1.3422, 1.4399];

const AHF_NUMERATOR_60HZ: [[f64; 6]; 2] = [
    [0.9528, -1.3891, 0.9528, 0.8272, -0.7225, 0.0264],
    [0.5824, -1.0810, 0.5824, 1.0736, -2.0000, 1.0736],
];
const AHF_DENOMINATOR_60HZ: [[f64; 6]; 2] = [
    [1.0000, -1.3880, 0.9066, 1.0000, -0.9739, 0.2371],
    [1.0000, -1.8407, 0.9894, 1.0000, -1.8584, 0.9891],
];
const AHF_OUTPUT_GAIN_60HZ: [f64; 2] = [1.3430, 1.4206];

/// Numerator and denominator for a second-order lowpass/highpass section.
pub fn band_coefficients(band: BandType, rate: SampleRate) -> ([f64; 3], [f64; 3]) {
    let i = rate.index();
    match band {
        BandType::Lowpass => (LPF_NUMERATOR[i], LPF_DENOMINATOR[i]),
        BandType::Highpass => (HPF_NUMERATOR[i], HPF_DENOMINATOR[i]),
    }
}

/// Numerator, denominator and output gain for the fourth-order anti-hum
/// section at the given sampling rate and mains frequency.
pub fn notch_coefficients(
    rate: SampleRate,
    notch: NotchFrequency,
) -> ([f64; 6], [f64; 6], f64) {
    let i = rate.index();
    match notch {
        NotchFrequency::Hz50 => (
            AHF_NUMERATOR_50HZ[i],
            AHF_DENOMINATOR_50HZ[i],
            AHF_OUTPUT_GAIN_50HZ[i],
        ),
        NotchFrequency::Hz60 => (
            AHF_NUMERATOR_60HZ[i],
            AHF_DENOMINATOR_60HZ[i],
            AHF_OUTPUT_GAIN_60HZ[i],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_rates_round_trip() {
        for hz in [500u32, 1000] {
            let rate = SampleRate::from_hz(hz).unwrap();
            assert_eq!(rate.hz(), hz);
        }
        assert!(SampleRate::from_hz(0).is_none());
        assert!(SampleRate::from_hz(250).is_none());
        assert!(SampleRate::from_hz(2000).is_none());
    }

    #[test]
    fn test_supported_notches_round_trip() {
        for hz in [50u32, 60] {
            let notch = NotchFrequency::from_hz(hz).unwrap();
            assert_eq!(notch.hz(), hz);
        }
        assert!(NotchFrequency::from_hz(55).is_none());
        assert!(NotchFrequency::from_hz(100).is_none());
    }

    #[test]
    fn test_band_tables_are_complete() {
        for rate in [SampleRate::Hz500, SampleRate::Hz1000] {
            for band in [BandType::Lowpass, BandType::Highpass] {
                let (num, den) = band_coefficients(band, rate);
                assert!(num.iter().any(|&c| c != 0.0));
                assert_ne!(den[0], 0.0);
            }
        }
    }

    #[test]
    fn test_notch_tables_are_normalized() {
        for rate in [SampleRate::Hz500, SampleRate::Hz1000] {
            for notch in [NotchFrequency::Hz50, NotchFrequency::Hz60] {
                let (_, den, gain) = notch_coefficients(rate, notch);
                assert_eq!(den[0], 1.0);
                assert_eq!(den[3], 1.0);
                assert!(gain > 1.0);
            }
        }
    }
}
