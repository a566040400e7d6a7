//! Silence floors for common integer sample formats.
//!
//! When samples are converted from integer PCM without rescaling, a window is treated as
//! silent if its largest value stays below 70% of the format's positive full scale.

use crate::float::Float;

/// Fraction of full scale below which a window counts as silence.
pub const SILENCE_THRESHOLD: f64 = 0.7;

/// Integer PCM formats with a preset silence floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    S8,
    U8,
    S16,
    U16,
    S24,
    U24,
    S32,
    U32,
}

impl SampleFormat {
    pub fn bits(&self) -> u32 {
        match self {
            SampleFormat::S8 | SampleFormat::U8 => 8,
            SampleFormat::S16 | SampleFormat::U16 => 16,
            SampleFormat::S24 | SampleFormat::U24 => 24,
            SampleFormat::S32 | SampleFormat::U32 => 32,
        }
    }

    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            SampleFormat::S8 | SampleFormat::S16 | SampleFormat::S24 | SampleFormat::S32
        )
    }

    /// Number of distinct positive values a sample of this format can reach from zero.
    pub fn full_scale(&self) -> f64 {
        let levels = 2f64.powi(self.bits() as i32);
        if self.is_signed() {
            levels / 2.0
        } else {
            levels
        }
    }

    /// Amplitude floor to pass as `silence_floor` when tracking samples of this format.
    pub fn silence_floor<T: Float>(&self) -> T {
        T::lossy_from_f64(self.full_scale() * SILENCE_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floors_match_full_scale() {
        assert_eq!(SampleFormat::S8.silence_floor::<f64>(), 128.0 * 0.7);
        assert_eq!(SampleFormat::U8.silence_floor::<f64>(), 256.0 * 0.7);
        assert_eq!(SampleFormat::S16.silence_floor::<f64>(), 32768.0 * 0.7);
        assert_eq!(SampleFormat::U24.silence_floor::<f64>(), 16777216.0 * 0.7);
        assert_eq!(SampleFormat::S32.silence_floor::<f64>(), 2147483648.0 * 0.7);
        assert_eq!(SampleFormat::U32.silence_floor::<f64>(), 4294967296.0 * 0.7);
    }
}
