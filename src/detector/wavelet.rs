//! Pitch tracking with the fast lifting wavelet transform, after *Real-Time Time-Domain Pitch
//! Tracking Using Wavelets* by Eric Larson and Ross Maddox.
//!
//! Each level of the decomposition halves the sample rate by averaging neighbouring samples.
//! At every level the tracker collects the maxima and minima that follow a crossing of the
//! DC component, builds a histogram of the distances between nearby extrema and takes the
//! most common distance (the *mode*) as a candidate period. A candidate is accepted once it
//! doubles cleanly from one level to the next, or once it matches the period found in the
//! previous window. Because the distances shrink by half with each level while the real
//! period does not, an octave error rarely survives two levels.
//!
//! ## Smoothing
//! The accepted frequency of the last [RING_SIZE] windows is kept in a ring. The reported
//! value is the average of the two neighbouring entries that agree best, and their difference
//! is the *precision* of the estimate. Estimates less precise than [PRECISION] Hz are only
//! reported in [Speed][OperatingMode::Speed] mode.

use crate::detector::config::TrackerConfig;
use crate::detector::internals::{
    Estimate, TrackerInternals, WindowOutcome, PRECISION, RING_SIZE,
};
use crate::detector::{OperatingMode, PitchTracker};
use crate::error::Result;
use crate::float::Float;

pub struct WaveletDetector<T>
where
    T: Float,
{
    config: TrackerConfig,
    internals: TrackerInternals<T>,
}

impl<T> WaveletDetector<T>
where
    T: Float,
{
    /// Create a tracker with the default configuration. `size` is the expected window
    /// length and only sizes the scratch buffers; windows of any length are accepted.
    pub fn new(size: usize) -> Self {
        WaveletDetector {
            config: TrackerConfig::default(),
            internals: TrackerInternals::new(size),
        }
    }

    pub fn with_config(size: usize, config: TrackerConfig) -> Result<Self> {
        config.validate()?;
        Ok(WaveletDetector {
            config,
            internals: TrackerInternals::new(size),
        })
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut TrackerConfig {
        &mut self.config
    }

    pub fn set_max_frequency(&mut self, hz: f64) {
        self.config.max_frequency = hz;
    }

    pub fn set_decomposition_levels(&mut self, levels: usize) {
        self.config.flwt_levels = levels;
    }

    pub fn set_histogram_neighbor_depth(&mut self, depth: usize) {
        self.config.diff_levels = depth;
    }

    pub fn set_threshold_ratio(&mut self, ratio: f64) {
        self.config.threshold_ratio = ratio;
    }

    /// Forget every previous window, as if the tracker had just been created.
    pub fn reset(&mut self) {
        self.internals.reset();
    }

    /// Recent per-window estimates in Hz, oldest slot first in storage order. Zero marks
    /// a window without a pitch.
    pub fn recent_estimates(&self) -> &[T; RING_SIZE] {
        self.internals.ring.values()
    }

    /// Track the pitch of the next window of the stream.
    ///
    /// `signal` is decomposed in place and its contents are unspecified afterwards.
    /// Windows whose largest sample is below `silence_floor` are reported as
    /// [Silent][Estimate::Silent]; `None` or zero disables the check.
    pub fn compute_pitch(
        &mut self,
        signal: &mut [T],
        silence_floor: Option<T>,
        mode: OperatingMode,
    ) -> Estimate<T> {
        let outcome = self
            .internals
            .estimate_window(signal, &self.config, silence_floor);

        let raw = match outcome {
            WindowOutcome::Period { frequency } => frequency,
            _ => T::zero(),
        };
        self.internals.ring.push(raw);

        match outcome {
            WindowOutcome::Silent => Estimate::Silent,
            WindowOutcome::NoPeriodicity => Estimate::NoPeriodicity,
            WindowOutcome::Period { frequency } => {
                let smoothed = self.internals.ring.closest_pair(frequency);
                gate(smoothed.frequency, smoothed.precision, mode)
            }
        }
    }
}

fn gate<T: Float>(frequency: T, precision: T, mode: OperatingMode) -> Estimate<T> {
    if frequency <= T::zero() {
        return Estimate::Unsettled;
    }

    if precision <= T::lossy_from_f64(PRECISION) {
        return Estimate::Pitched {
            frequency,
            precision,
        };
    }

    match mode {
        OperatingMode::Speed => Estimate::Pitched {
            frequency,
            precision,
        },
        OperatingMode::Accuracy => {
            log::debug!(
                "Suppressing {} Hz, recent estimates disagree by {} Hz",
                frequency,
                precision
            );
            Estimate::Suppressed {
                frequency,
                precision,
            }
        }
    }
}

impl<T> PitchTracker<T> for WaveletDetector<T>
where
    T: Float,
{
    fn get_pitch(&mut self, signal: &mut [T], silence_floor: Option<T>, mode: OperatingMode) -> T {
        self.compute_pitch(signal, silence_floor, mode).or_unpitched()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn gate_passes_precise_estimates_in_both_modes() {
        for mode in [OperatingMode::Accuracy, OperatingMode::Speed] {
            assert_eq!(
                gate(440.0, 2.0, mode),
                Estimate::Pitched {
                    frequency: 440.0,
                    precision: 2.0
                }
            );
        }
    }

    #[test]
    fn gate_depends_on_mode_for_imprecise_estimates() {
        assert_eq!(
            gate(450.0, 20.0, OperatingMode::Accuracy),
            Estimate::Suppressed {
                frequency: 450.0,
                precision: 20.0
            }
        );
        assert_eq!(
            gate(450.0, 20.0, OperatingMode::Speed),
            Estimate::Pitched {
                frequency: 450.0,
                precision: 20.0
            }
        );
    }

    #[test]
    fn gate_reports_zero_as_unsettled() {
        assert_eq!(gate(0.0f32, 0.0, OperatingMode::Speed), Estimate::Unsettled);
    }

    #[test]
    fn setters_only_touch_config() {
        let mut detector = WaveletDetector::<f64>::new(1024);
        detector.set_max_frequency(1500.0);
        detector.set_decomposition_levels(4);
        detector.set_histogram_neighbor_depth(2);
        detector.set_threshold_ratio(0.5);

        assert_eq!(
            detector.config(),
            &TrackerConfig {
                flwt_levels: 4,
                diff_levels: 2,
                max_frequency: 1500.0,
                threshold_ratio: 0.5,
            }
        );
        assert_eq!(detector.recent_estimates(), &[0.0; RING_SIZE]);
    }

    #[test]
    fn with_config_validates() {
        let config = TrackerConfig {
            threshold_ratio: -0.1,
            ..Default::default()
        };
        let result = WaveletDetector::<f64>::with_config(1024, config);
        assert!(matches!(
            result,
            Err(Error::InvalidParameter {
                name: "threshold_ratio",
                ..
            })
        ));
    }
}
