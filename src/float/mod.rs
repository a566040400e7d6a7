//! Generic [Float] type which acts as a stand-in for `f32` or `f64`.
use rustfft::num_traits::float::FloatCore as NumFloatCore;
use rustfft::FftNum;
use std::fmt::{Debug, Display};

/// Signals are processed as arrays of [Float]s. A [Float] is normally `f32` or `f64`.
pub trait Float: Display + Debug + NumFloatCore + FftNum {
    /// Convert a sample count or histogram index. Precision loss is accepted for `f32`.
    fn lossy_from_usize(n: usize) -> Self;
    /// Convert a configuration value given in `f64`.
    fn lossy_from_f64(x: f64) -> Self;
}

impl Float for f64 {
    fn lossy_from_usize(n: usize) -> Self {
        n as f64
    }

    fn lossy_from_f64(x: f64) -> Self {
        x
    }
}

impl Float for f32 {
    fn lossy_from_usize(n: usize) -> Self {
        n as f32
    }

    fn lossy_from_f64(x: f64) -> Self {
        x as f32
    }
}
