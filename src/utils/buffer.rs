use object_pool::{Pool, Reusable};

use crate::float::Float;

pub fn new_real_buffer<T: Float>(size: usize) -> Vec<T> {
    vec![T::zero(); size]
}

pub fn new_index_buffer(capacity: usize) -> Vec<usize> {
    Vec::with_capacity(capacity)
}

/// Level-invariant amplitude figures of a window, computed once before decomposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowStats<T> {
    /// Mean of the window.
    pub dc: T,
    /// Largest sample, never below zero.
    pub max: T,
    /// Smallest sample, never above zero.
    pub min: T,
}

pub fn window_stats<T: Float>(signal: &[T]) -> WindowStats<T> {
    let (sum, max, min) = signal.iter().fold(
        (T::zero(), T::zero(), T::zero()),
        |(sum, max, min), &s| (sum + s, max.max(s), min.min(s)),
    );
    let dc = if signal.is_empty() {
        T::zero()
    } else {
        sum / T::lossy_from_usize(signal.len())
    };

    WindowStats { dc, max, min }
}

/// One step of the lifting wavelet low-pass: the first `len / 2` entries of `signal` are
/// overwritten with the average of each pair in `signal[..len]`. Returns the new length.
pub fn haar_downsample<T: Float>(signal: &mut [T], len: usize) -> usize {
    assert!(len <= signal.len());
    let half = len / 2;
    let two = T::one() + T::one();
    for j in 0..half {
        signal[j] = (signal[2 * j] + signal[2 * j + 1]) / two;
    }
    half
}

/// A pool of index buffers used as per-level scratch (extrema positions and the
/// distance histogram). Buffers are created on demand and returned to the pool when
/// `Drop`ed, so steady-state tracking does not allocate.
///
/// ```rust
/// use wavelet_pitch::utils::buffer::ScratchPool;
///
/// let pool = ScratchPool::new(8);
/// {
///     let mut maxima = pool.get_position_buffer();
///     maxima.extend_from_slice(&[3, 11, 19]);
/// }
/// // The buffer comes back empty, but keeps its storage.
/// let maxima = pool.get_position_buffer();
/// assert!(maxima.is_empty());
/// assert!(maxima.capacity() >= 3);
///
/// let histogram = pool.get_count_buffer(5);
/// assert_eq!(&histogram[..], &[0, 0, 0, 0, 0]);
/// ```
pub struct ScratchPool {
    positions: Pool<Vec<usize>>,
    counts: Pool<Vec<usize>>,
    pub buffer_size: usize,
}

impl ScratchPool {
    pub fn new(buffer_size: usize) -> Self {
        ScratchPool {
            positions: Pool::new(0, || new_index_buffer(buffer_size)),
            counts: Pool::new(0, || new_index_buffer(buffer_size)),
            buffer_size,
        }
    }

    /// Get an empty position list that can be used until it is `Drop`ed.
    pub fn get_position_buffer(&self) -> Reusable<'_, Vec<usize>> {
        let mut buffer = self
            .positions
            .pull(|| new_index_buffer(self.buffer_size / 2));
        buffer.clear();
        buffer
    }

    /// Get a zeroed histogram of `len` buckets that can be used until it is `Drop`ed.
    pub fn get_count_buffer(&self, len: usize) -> Reusable<'_, Vec<usize>> {
        let mut buffer = self.counts.pull(|| new_index_buffer(self.buffer_size));
        buffer.clear();
        buffer.resize(len, 0);
        buffer
    }
}
