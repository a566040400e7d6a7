use crate::float::Float;

pub mod config;
pub mod internals;
pub mod wavelet;

/// Trade-off applied when recent estimates disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperatingMode {
    /// Report a pitch only when two recent estimates agree within
    /// [PRECISION][internals::PRECISION].
    #[default]
    Accuracy,
    /// Always report the best available estimate, even when it is less certain.
    Speed,
}

pub trait PitchTracker<T>
where
    T: Float,
{
    /// Track the pitch of the next window of a stream. `signal` is used as scratch and is
    /// overwritten. Returns the frequency in Hz, or [UNPITCHED][internals::UNPITCHED].
    fn get_pitch(&mut self, signal: &mut [T], silence_floor: Option<T>, mode: OperatingMode) -> T;
}
