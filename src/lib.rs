//! # Wavelet Pitch
//! *wavelet_pitch* tracks the fundamental frequency of a monophonic stream, one window at a
//! time, without a Fourier transform. Each window is repeatedly halved with a Haar low-pass
//! and the spacing of its maxima and minima is measured at every level. Consecutive windows
//! are smoothed so that a tuner or pitch-following effect gets a steady value.
//!
//! Samples are assumed to be recorded at [SAMPLE_RATE][detector::internals::SAMPLE_RATE] Hz.
//!
//! # Detectors
//!   * [WaveletDetector][detector::wavelet]
//!
//! # Examples
//! ```
//! use wavelet_pitch::detector::wavelet::WaveletDetector;
//! use wavelet_pitch::detector::OperatingMode;
//!
//! fn main() {
//!     const SAMPLE_RATE: usize = 44100;
//!     const SIZE: usize = 2048;
//!
//!     let mut detector = WaveletDetector::new(SIZE);
//!     let dt = 1.0 / SAMPLE_RATE as f64;
//!     let freq = 440.0;
//!
//!     for window in 0..3 {
//!         // Signal coming from some source (microphone, generated, etc...)
//!         let mut signal: Vec<f64> = (0..SIZE)
//!             .map(|x| (2.0 * std::f64::consts::PI * (window * SIZE + x) as f64 * dt * freq).sin())
//!             .collect();
//!
//!         let estimate = detector.compute_pitch(&mut signal, None, OperatingMode::Accuracy);
//!         if let Some(frequency) = estimate.frequency() {
//!             println!("Frequency: {}, Precision: {:?}", frequency, estimate.precision());
//!         }
//!     }
//! }
//! ```

pub use detector::internals::Estimate;
pub use error::{Error, Result};

pub mod detector;
pub mod error;
pub mod float;
pub mod format;
pub mod utils;
