//! Streams a short captured EMG trace through the conditioning chain and
//! prints the first few input/output pairs.
//!
//! Run with: `cargo run --example stream_demo`

use emg_filters::{EmgFilterChain, FilterConfig};

// First 100 samples of an 8-bit EMG capture at 500 Hz (one channel).
const CAPTURE: [f64; 100] = [
    125.0, 123.0, 126.0, 111.0, 115.0, 126.0, 125.0, 108.0, 120.0, 128.0, 129.0, 121.0, 120.0,
    124.0, 125.0, 112.0, 109.0, 124.0, 123.0, 122.0, 114.0, 114.0, 124.0, 133.0, 125.0, 101.0,
    119.0, 123.0, 126.0, 126.0, 116.0, 111.0, 128.0, 123.0, 132.0, 134.0, 115.0, 100.0, 114.0,
    131.0, 124.0, 131.0, 119.0, 120.0, 117.0, 115.0, 121.0, 121.0, 124.0, 121.0, 120.0, 117.0,
    123.0, 124.0, 117.0, 122.0, 119.0, 121.0, 120.0, 119.0, 116.0, 125.0, 125.0, 113.0, 121.0,
    126.0, 127.0, 114.0, 114.0, 115.0, 123.0, 116.0, 126.0, 126.0, 117.0, 116.0, 132.0, 121.0,
    117.0, 123.0, 116.0, 115.0, 116.0, 129.0, 123.0, 121.0, 118.0, 114.0, 125.0, 114.0, 113.0,
    126.0, 125.0, 125.0, 119.0, 116.0, 115.0, 127.0, 125.0, 122.0,
];

fn main() {
    let config = FilterConfig {
        sample_rate_hz: 500,
        notch_frequency_hz: 50,
        enable_notch: true,
        enable_lowpass: true,
        enable_highpass: false,
    };
    config.validate().expect("supported configuration");

    let mut chain = EmgFilterChain::from_config(&config);
    let conditioned: Vec<f64> = CAPTURE.iter().map(|&raw| chain.update(raw)).collect();

    for (raw, out) in CAPTURE.iter().zip(&conditioned).take(5) {
        println!("{raw:6.1} -> {out:10.4}");
    }
}
