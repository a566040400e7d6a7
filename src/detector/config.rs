//! Tunable parameters of the wavelet tracker.

use crate::error::{Error, Result};

/// Default number of decomposition levels to attempt.
pub const FLWT_LEVELS: usize = 6;
/// Default number of successors each extremum is paired with in the distance histogram.
pub const DIFF_LEVELS: usize = 3;
/// Default upper bound on the expected fundamental, in Hz.
pub const MAX_FREQUENCY: f64 = 3000.0;
/// Default fraction of the peak-to-DC amplitude an extremum must reach.
pub const THRESHOLD_RATIO: f64 = 0.75;

/// Tracker configuration. Every field may be changed between windows; changes take
/// effect on the next call and never touch the tracker's history.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// Number of decomposition levels to attempt (default: 6).
    /// Level 0 is the raw window, so at most `flwt_levels - 1` downsampled levels are analysed.
    pub flwt_levels: usize,

    /// How many following extrema each extremum is measured against (default: 3).
    pub diff_levels: usize,

    /// Highest fundamental expected, in Hz (default: 3000.0).
    /// Sets the minimum spacing between accepted extrema.
    pub max_frequency: f64,

    /// Fraction (0-1) of the distance between DC and each extreme used as the
    /// acceptance threshold for extrema (default: 0.75).
    pub threshold_ratio: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            flwt_levels: FLWT_LEVELS,
            diff_levels: DIFF_LEVELS,
            max_frequency: MAX_FREQUENCY,
            threshold_ratio: THRESHOLD_RATIO,
        }
    }
}

impl TrackerConfig {
    /// Check that the parameters describe a tracker that can find a pitch at all.
    pub fn validate(&self) -> Result<()> {
        if self.flwt_levels < 2 {
            return Err(Error::InvalidParameter {
                name: "flwt_levels",
                value: self.flwt_levels.to_string(),
                reason: "at least two decomposition levels are needed",
            });
        }
        if self.diff_levels == 0 {
            return Err(Error::InvalidParameter {
                name: "diff_levels",
                value: self.diff_levels.to_string(),
                reason: "each extremum must be paired with at least one successor",
            });
        }
        if !self.max_frequency.is_finite() || self.max_frequency <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "max_frequency",
                value: self.max_frequency.to_string(),
                reason: "must be a positive frequency in Hz",
            });
        }
        if !(0.0..=1.0).contains(&self.threshold_ratio) {
            return Err(Error::InvalidParameter {
                name: "threshold_ratio",
                value: self.threshold_ratio.to_string(),
                reason: "must lie between 0 and 1",
            });
        }
        Ok(())
    }
}
