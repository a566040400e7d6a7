use crate::float::Float;

/// True when `a` and `b` are within `tolerance` whole samples of each other.
/// The fractional part of the distance is dropped before comparing.
pub fn within_samples<T: Float>(a: T, b: T, tolerance: usize) -> bool {
    (a - b).abs().trunc() <= T::lossy_from_usize(tolerance)
}

/// Add the distances between each position and its `depth` successors to `histogram`.
/// Returns the largest bucket index that was incremented, or `max_index` if larger.
pub fn accumulate_distances(
    positions: &[usize],
    depth: usize,
    histogram: &mut [usize],
    max_index: usize,
) -> usize {
    let mut max_index = max_index;
    for (j, &from) in positions.iter().enumerate() {
        for &to in positions.iter().skip(j + 1).take(depth) {
            let distance = to.abs_diff(from);
            histogram[distance] += 1;
            max_index = max_index.max(distance);
        }
    }
    max_index
}

/// Everything mode selection needs to know about the level being analysed.
pub struct ModeSearch<T: Float> {
    /// Half-width of the neighbourhood summed around each bucket.
    pub dist_delta: usize,
    /// Number of samples in the current level.
    pub sample_count: usize,
    /// Mode of the previous window rescaled to this level, if there is one.
    pub previous: Option<T>,
}

impl<T: Float> ModeSearch<T> {
    fn near_previous(&self, i: usize) -> bool {
        self.previous
            .map(|previous| within_samples(T::lossy_from_usize(i), previous, self.dist_delta))
            .unwrap_or(false)
    }

    fn local_count(&self, histogram: &[usize], i: usize, max_index: usize) -> usize {
        let lo = i.saturating_sub(self.dist_delta);
        let hi = (i + self.dist_delta).min(max_index);
        histogram[lo..=hi].iter().sum()
    }

    /// Choose the bucket around which the distances cluster most, or 0 if none stands out.
    ///
    /// Ties are broken in favour of continuity: a bucket close to the previous window's
    /// mode, or exactly one octave below the current choice, takes over an equal count.
    /// A bucket close to the previous mode also wins when it trails by a single count.
    pub fn select_center(&self, histogram: &[usize], max_index: usize) -> usize {
        let mut center_index = 0;
        let mut center_count = 1;

        for i in 1..=max_index {
            if histogram[i] == 0 {
                continue;
            }

            let count = self.local_count(histogram, i, max_index);

            if count == center_count && count > self.sample_count / i / 4 {
                if self.near_previous(i) || i == center_index * 2 {
                    center_index = i;
                }
            } else if count > center_count {
                center_index = i;
                center_count = count;
            } else if count + 1 == center_count && self.near_previous(i) {
                center_index = i;
            }
        }

        center_index
    }

    /// Count-weighted mean distance of the non-empty buckets around `center`.
    pub fn weighted_mode(&self, histogram: &[usize], max_index: usize, center: usize) -> Option<T> {
        if center == 0 {
            return None;
        }

        let lo = center.saturating_sub(self.dist_delta);
        let hi = (center + self.dist_delta).min(max_index);
        let (total, weight) = (lo..=hi)
            .filter(|&i| histogram[i] > 0)
            .fold((0usize, 0usize), |(total, weight), i| {
                (total + i * histogram[i], weight + histogram[i])
            });

        if weight == 0 {
            None
        } else {
            Some(T::lossy_from_usize(total) / T::lossy_from_usize(weight))
        }
    }
}
