// src/processing/fourth_order.rs
//! Fourth-order anti-hum section: two cascaded transposed biquads

use super::coefficients::{notch_coefficients, NotchFrequency, SampleRate};

/// Two direct-form-II-transposed biquads in cascade with a shared output
/// gain, used for mains-hum rejection at 50/60 Hz.
///
/// The six-element coefficient vectors hold two concatenated biquad triples
/// (indices 0..3 and 3..6). The leading denominator coefficients `den[0]`
/// and `den[3]` are normalized to 1.0 in the tables and do not appear in
/// the recursion, unlike [`SecondOrderSection`](super::SecondOrderSection)
/// which divides by its leading coefficient explicitly.
#[derive(Debug, Clone)]
pub struct FourthOrderSection {
    num: [f64; 6],
    den: [f64; 6],
    gain: f64,
    states: [f64; 4],
}

impl FourthOrderSection {
    /// Create a section from the fixed anti-hum table for the given
    /// sampling rate and mains frequency. State starts at zero.
    pub fn new(rate: SampleRate, notch: NotchFrequency) -> Self {
        let (num, den, gain) = notch_coefficients(rate, notch);
        Self {
            num,
            den,
            gain,
            states: [0.0; 4],
        }
    }

    /// Process one sample through both biquads, updating all four state
    /// scalars in place, and apply the output gain.
    pub fn update(&mut self, input: f64) -> f64 {
        let mut stage_out = self.num[0] * input + self.states[0];
        self.states[0] = (self.num[1] * input + self.states[1]) - self.den[1] * stage_out;
        self.states[1] = self.num[2] * input - self.den[2] * stage_out;

        let stage_in = stage_out;
        stage_out = self.num[3] * stage_in + self.states[2];
        self.states[2] = (self.num[4] * stage_in + self.states[3]) - self.den[4] * stage_out;
        self.states[3] = self.num[5] * stage_in - self.den[5] * stage_out;

        self.gain * stage_out
    }
}
