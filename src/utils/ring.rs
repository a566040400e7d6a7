use crate::float::Float;

/// Disagreement reported when no adjacent pair in the ring agrees better than this.
pub const DEFAULT_PRECISION: f64 = 50.0;

/// A smoothed frequency together with the disagreement of the pair it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smoothed<T> {
    pub frequency: T,
    pub precision: T,
}

/// Fixed-size circular buffer of the most recent per-window estimates, in Hz.
/// Unpitched windows are stored as zero.
#[derive(Debug, Clone)]
pub struct SmoothingRing<T, const N: usize> {
    values: [T; N],
    cursor: usize,
}

impl<T: Float, const N: usize> SmoothingRing<T, N> {
    pub fn new() -> Self {
        SmoothingRing {
            values: [T::zero(); N],
            cursor: 0,
        }
    }

    /// Overwrite the oldest entry with `value`.
    pub fn push(&mut self, value: T) {
        if N == 0 {
            return;
        }
        self.values[self.cursor] = value;
        self.cursor = (self.cursor + 1) % N;
    }

    pub fn values(&self) -> &[T; N] {
        &self.values
    }

    pub fn clear(&mut self) {
        self.values = [T::zero(); N];
        self.cursor = 0;
    }

    /// Find the adjacent pair (wrapping around) that disagrees the least and return its
    /// average. If no pair is closer than [DEFAULT_PRECISION], `fallback` is returned as is.
    pub fn closest_pair(&self, fallback: T) -> Smoothed<T> {
        let mut best = Smoothed {
            frequency: fallback,
            precision: T::lossy_from_f64(DEFAULT_PRECISION),
        };
        let two = T::one() + T::one();

        for j in 0..N {
            let (a, b) = (self.values[j], self.values[(j + 1) % N]);
            let precision = (a - b).abs();
            if precision < best.precision {
                best = Smoothed {
                    frequency: (a + b) / two,
                    precision,
                };
            }
        }

        best
    }
}

impl<T: Float, const N: usize> Default for SmoothingRing<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
