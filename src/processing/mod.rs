// src/processing/mod.rs
//! Sample-by-sample IIR conditioning for EMG streams

pub mod chain;
pub mod coefficients;
pub mod fourth_order;
pub mod second_order;

pub use chain::EmgFilterChain;
pub use coefficients::{BandType, NotchFrequency, SampleRate};
pub use fourth_order::FourthOrderSection;
pub use second_order::SecondOrderSection;
