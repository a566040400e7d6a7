use crate::detector::config::TrackerConfig;
use crate::float::Float;
use crate::utils::buffer::{haar_downsample, window_stats, ScratchPool};
use crate::utils::histogram::{accumulate_distances, within_samples, ModeSearch};
use crate::utils::peak::{detect_extrema, Thresholds};
use crate::utils::ring::SmoothingRing;

/// Sample rate the tracker assumes for every window, in Hz.
pub const SAMPLE_RATE: usize = 44100;
/// Number of per-window estimates kept for smoothing.
pub const RING_SIZE: usize = 3;
/// Largest disagreement, in Hz, for a smoothed estimate to be trusted in every mode.
pub const PRECISION: f64 = 5.0;
/// Value reported by [PitchTracker][crate::detector::PitchTracker] when no pitch was found.
pub const UNPITCHED: f64 = 0.0;

/// Result of tracking one window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Estimate<T>
where
    T: Float,
{
    /// A pitch was found. `precision` is the disagreement, in Hz, between the two
    /// recent estimates it was averaged from; above [PRECISION] it is a low-confidence value.
    Pitched { frequency: T, precision: T },
    /// A pitch was found but its precision was too poor for [Accuracy][super::OperatingMode::Accuracy] mode.
    Suppressed { frequency: T, precision: T },
    /// This window had a period but recent windows did not, so no stable value exists yet.
    Unsettled,
    /// No stable period was found at any decomposition level.
    NoPeriodicity,
    /// The window's peak was below the silence floor.
    Silent,
}

impl<T: Float> Estimate<T> {
    /// The emitted frequency, if any.
    pub fn frequency(&self) -> Option<T> {
        match *self {
            Estimate::Pitched { frequency, .. } => Some(frequency),
            _ => None,
        }
    }

    /// Disagreement between the smoothed estimates, for both emitted and suppressed pitches.
    pub fn precision(&self) -> Option<T> {
        match *self {
            Estimate::Pitched { precision, .. } | Estimate::Suppressed { precision, .. } => {
                Some(precision)
            }
            _ => None,
        }
    }

    pub fn is_pitched(&self) -> bool {
        matches!(self, Estimate::Pitched { .. })
    }

    /// Collapse to a plain frequency where [UNPITCHED] stands for every other outcome.
    pub fn or_unpitched(&self) -> T {
        self.frequency()
            .unwrap_or_else(|| T::lossy_from_f64(UNPITCHED))
    }
}

/// The period established by the last successful window, used to keep consecutive
/// windows consistent. `mode` is measured in samples of decomposition level `level + 2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Continuity<T> {
    pub mode: T,
    pub level: u32,
}

/// Unsmoothed outcome of a single window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowOutcome<T> {
    Silent,
    NoPeriodicity,
    Period { frequency: T },
}

/// State a tracker carries from one window to the next, plus its scratch buffers.
pub struct TrackerInternals<T>
where
    T: Float,
{
    pub size: usize,
    pub scratch: ScratchPool,
    pub history: Option<Continuity<T>>,
    pub ring: SmoothingRing<T, RING_SIZE>,
}

impl<T> TrackerInternals<T>
where
    T: Float,
{
    pub fn new(size: usize) -> Self {
        TrackerInternals {
            size,
            scratch: ScratchPool::new(size),
            history: None,
            ring: SmoothingRing::new(),
        }
    }

    pub fn reset(&mut self) {
        self.history = None;
        self.ring.clear();
    }

    /// Find the period of `signal`, decomposing it in place, and update the history.
    pub fn estimate_window(
        &mut self,
        signal: &mut [T],
        config: &TrackerConfig,
        silence_floor: Option<T>,
    ) -> WindowOutcome<T> {
        let outcome = estimate_period(signal, config, silence_floor, &self.scratch, &mut self.history);
        if !matches!(outcome, WindowOutcome::Period { .. }) {
            self.history = None;
        }
        outcome
    }
}

fn continuity<T: Float>(mode: T, level: u32) -> Option<Continuity<T>> {
    if mode > T::zero() {
        Some(Continuity { mode, level })
    } else {
        None
    }
}

/// Minimum spacing, in samples of the current level, between two accepted extrema.
fn min_distance<T: Float>(sample_rate: T, max_frequency: T, power2: usize, sample_count: usize) -> usize {
    (sample_rate / (max_frequency * T::lossy_from_usize(power2)))
        .floor()
        .to_usize()
        .unwrap_or(sample_count)
        .clamp(1, sample_count.max(1))
}

/// Run the level loop on one window: downsample, collect extrema, pick the dominant
/// extrema spacing and accept it once it agrees with the previous level or window.
///
/// `history` is updated when a period is found. Callers are expected to clear it on
/// every other outcome.
pub fn estimate_period<T: Float>(
    signal: &mut [T],
    config: &TrackerConfig,
    silence_floor: Option<T>,
    scratch: &ScratchPool,
    history: &mut Option<Continuity<T>>,
) -> WindowOutcome<T> {
    let stats = window_stats(signal);

    if let Some(floor) = silence_floor.filter(|floor| *floor > T::zero()) {
        if stats.max < floor {
            log::debug!("Window peak {} below silence floor {}", stats.max, floor);
            return WindowOutcome::Silent;
        }
    }

    let sample_rate = T::lossy_from_usize(SAMPLE_RATE);
    let max_frequency = T::lossy_from_f64(config.max_frequency);
    let thresholds = Thresholds::new(
        stats.dc,
        stats.max,
        stats.min,
        T::lossy_from_f64(config.threshold_ratio),
    );
    let two = T::one() + T::one();

    let mut maxima = scratch.get_position_buffer();
    let mut minima = scratch.get_position_buffer();

    let mut sample_count = signal.len();
    let mut power2 = 1usize;
    let mut old_mode = T::zero();

    for level in 1..config.flwt_levels {
        if sample_count < 4 {
            log::trace!("Window too short for decomposition level {}", level);
            break;
        }
        sample_count = haar_downsample(signal, sample_count);
        power2 <<= 1;
        let approx = &signal[..sample_count];

        let dist_delta = min_distance(sample_rate, max_frequency, power2, sample_count);
        detect_extrema(approx, &thresholds, dist_delta, &mut maxima, &mut minima);

        if maxima.is_empty() && minima.is_empty() {
            log::debug!("No extrema at level {}, window has no periodicity", level);
            return WindowOutcome::NoPeriodicity;
        }

        let mut histogram = scratch.get_count_buffer(sample_count);
        let max_index = accumulate_distances(&maxima, config.diff_levels, &mut histogram, 0);
        let max_index = accumulate_distances(&minima, config.diff_levels, &mut histogram, max_index);

        let search = ModeSearch {
            dist_delta,
            sample_count,
            previous: history.map(|h| h.mode / T::lossy_from_usize(power2)),
        };
        let center = search.select_center(&histogram, max_index);
        let mode = search
            .weighted_mode(&histogram, max_index, center)
            .unwrap_or_else(T::zero);

        log::trace!(
            "Level {}: {} maxima, {} minima, dist_delta {}, mode {}",
            level,
            maxima.len(),
            minima.len(),
            dist_delta,
            mode
        );

        // The period has survived one more halving of the sample rate.
        if old_mode > T::zero() && within_samples(two * mode, old_mode, dist_delta) {
            let frequency = sample_rate / (T::lossy_from_usize(power2 / 2) * old_mode);
            *history = continuity(mode, level as u32 - 2);
            log::debug!("Stable period across levels {} and {}: {} Hz", level - 1, level, frequency);
            return WindowOutcome::Period { frequency };
        }

        // The first level agrees with the period of the previous window.
        if level == 1 {
            if let Some(last) = *history {
                let rescaled = last.mode * T::lossy_from_usize(power2 << last.level);
                if within_samples(rescaled, mode, dist_delta) {
                    let frequency = sample_rate / (T::lossy_from_usize(power2) * mode);
                    *history = continuity(mode, 1);
                    log::debug!("Period matches previous window: {} Hz", frequency);
                    return WindowOutcome::Period { frequency };
                }
            }
        }

        old_mode = mode;
    }

    log::debug!("No stable period after {} levels", config.flwt_levels.saturating_sub(1));
    WindowOutcome::NoPeriodicity
}
