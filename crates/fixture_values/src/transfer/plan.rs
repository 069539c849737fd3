//! Chunk layout for a parallel transfer.

use std::ops::Range;

/// Contiguous index range `[start, end)` handled by one worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chunk {
    /// First index (inclusive).
    pub start: usize,
    /// Last index (exclusive).
    pub end: usize,
}

impl Chunk {
    /// Number of indices in the chunk.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the chunk holds no indices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `index` falls inside the chunk.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        (self.start..self.end).contains(&index)
    }

    /// The chunk as an ascending index range.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Split of `[start, end)` into chunks of `ceil(len / workers)` indices.
///
/// Chunks are produced in ascending order; only the last one can be short.
/// With fewer indices than workers, fewer chunks are produced.
///
/// # Examples
///
/// ```rust
/// use fixture_values::transfer::{Chunk, ChunkPlan};
///
/// let plan = ChunkPlan::for_range(0, 10, 4);
/// assert_eq!(plan.chunk_size(), 3);
/// assert_eq!(
///     plan.chunks().collect::<Vec<_>>(),
///     vec![
///         Chunk { start: 0, end: 3 },
///         Chunk { start: 3, end: 6 },
///         Chunk { start: 6, end: 9 },
///         Chunk { start: 9, end: 10 },
///     ]
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkPlan {
    start: usize,
    end: usize,
    chunk_size: usize,
}

impl ChunkPlan {
    /// Plans chunks for `[start, end)` across `workers` workers.
    ///
    /// `end <= start` yields an empty plan; `workers == 0` is treated as one.
    pub fn for_range(start: usize, end: usize, workers: usize) -> Self {
        let count = end.saturating_sub(start);
        let chunk_size = count.div_ceil(workers.max(1));
        Self {
            start,
            end: start + count,
            chunk_size,
        }
    }

    /// Nominal number of indices per chunk (0 for an empty plan).
    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Total number of indices covered.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if no index is covered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of chunks, i.e. workers that will be launched.
    #[inline]
    pub fn chunk_count(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.index_count().div_ceil(self.chunk_size)
        }
    }

    /// Chunks in ascending order.
    pub fn chunks(&self) -> impl Iterator<Item = Chunk> {
        let (end, size) = (self.end, self.chunk_size);
        (self.start..end).step_by(size.max(1)).map(move |s| Chunk {
            start: s,
            end: s.saturating_add(size).min(end),
        })
    }

    /// The chunk that owns `index`, if covered.
    pub fn chunk_of(&self, index: usize) -> Option<Chunk> {
        if !(self.start..self.end).contains(&index) {
            return None;
        }
        let s = self.start + (index - self.start) / self.chunk_size * self.chunk_size;
        Some(Chunk {
            start: s,
            end: (s + self.chunk_size).min(self.end),
        })
    }
}
