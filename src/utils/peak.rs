use crate::float::Float;

/// Amplitude gates for accepting extrema. Derived once per window and shared by
/// every decomposition level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds<T: Float> {
    pub dc: T,
    pub max: T,
    pub min: T,
}

impl<T: Float> Thresholds<T> {
    /// Place the gates at `ratio` of the way from the DC component to each extreme.
    pub fn new(dc: T, max_value: T, min_value: T, ratio: T) -> Self {
        Thresholds {
            dc,
            max: (max_value - dc) * ratio + dc,
            min: (min_value - dc) * ratio + dc,
        }
    }
}

fn crosses<T: Float>(prev: T, curr: T, dc: T) -> bool {
    (curr <= dc && prev > dc) || (curr >= dc && prev < dc)
}

/// Collect the positions of the maxima and minima of `level` that are worth measuring.
///
/// An extremum is kept only if it clears its amplitude threshold, the signal has crossed
/// the DC component since the previous kept extremum, and at least `dist_delta` samples
/// have passed since then. `maxima` and `minima` are cleared first.
pub fn detect_extrema<T: Float>(
    level: &[T],
    thresholds: &Thresholds<T>,
    dist_delta: usize,
    maxima: &mut Vec<usize>,
    minima: &mut Vec<usize>,
) {
    maxima.clear();
    minima.clear();
    if level.len() < 2 {
        return;
    }

    let mut prev_slope = level[1] - level[0];
    if prev_slope <= T::zero() {
        prev_slope = -T::one();
    }
    let mut zero_crossed = true;
    let mut too_close = 0usize;

    for (j, win) in level.windows(2).enumerate() {
        let (prev, curr) = (win[0], win[1]);
        let slope = curr - prev;

        if prev_slope >= T::zero() && slope < T::zero() {
            if prev >= thresholds.max && zero_crossed && too_close == 0 {
                maxima.push(j);
                zero_crossed = false;
                too_close = dist_delta;
            }
        } else if prev_slope <= T::zero() && slope > T::zero() {
            if prev <= thresholds.min && zero_crossed && too_close == 0 {
                minima.push(j);
                zero_crossed = false;
                too_close = dist_delta;
            }
        }

        if crosses(prev, curr, thresholds.dc) {
            zero_crossed = true;
        }

        prev_slope = slope;
        too_close = too_close.saturating_sub(1);
    }
}
