//! Fork-join transfer over an index range.
//!
//! [`transfer`] applies a per-index operation to every index in
//! `[start, end)` using one Rayon task per chunk and reports whether every
//! call succeeded. [`transfer_into`] does the same over a mutable output
//! slice, handing each worker exclusive access to its own sub-slice.
//!
//! # Failure Policy
//!
//! A worker stops walking its own chunk at the first index whose operation
//! returns `false`. Sibling workers are never signalled: they finish their
//! chunks regardless. The coordinator joins every worker before it reads the
//! shared failure flag.
//!
//! ```text
//!  [start ............................................ end)
//!  ├── chunk 0 ──┼── chunk 1 ──┼── chunk 2 ──┼── chunk 3 ─┤
//!     worker 0      worker 1      worker 2      worker 3
//!        │             │  ✗ stop     │             │
//!        └─────────────┴──────┬──────┴─────────────┘
//!                          join → !failed
//! ```
//!
//! # Worker Count
//!
//! The number of chunks is derived from [`rayon::current_num_threads`] on
//! every call, so running inside `ThreadPool::install` changes the split.
//!
//! # Example
//!
//! ```rust
//! use fixture_values::transfer::{transfer, transfer_into};
//!
//! assert!(transfer(0, 1_000, |i| i < 1_000));
//! assert!(!transfer(0, 1_000, |i| i != 500));
//!
//! let mut squares = vec![0usize; 100];
//! assert!(transfer_into(&mut squares, |i, slot| {
//!     *slot = i * i;
//!     true
//! }));
//! assert_eq!(squares[9], 81);
//! ```

mod plan;

pub use plan::{Chunk, ChunkPlan};

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, trace};

/// Plans the chunks for `[start, end)` using the current Rayon pool size.
#[inline]
pub fn current_plan(start: usize, end: usize) -> ChunkPlan {
    ChunkPlan::for_range(start, end, rayon::current_num_threads())
}

/// Applies `f` to every index in `[start, end)` in parallel.
///
/// Returns `true` iff every invocation returned `true`. `end <= start`
/// launches nothing and returns `true`.
///
/// `f` is called concurrently from several workers; it must only touch
/// state owned by index `i` or otherwise synchronised.
pub fn transfer<F>(start: usize, end: usize, f: F) -> bool
where
    F: Fn(usize) -> bool + Sync,
{
    let plan = current_plan(start, end);
    if plan.is_empty() {
        return true;
    }
    debug!(
        start,
        end,
        chunk_size = plan.chunk_size(),
        workers = plan.chunk_count(),
        "transfer"
    );

    let failed = AtomicBool::new(false);
    let f = &f;
    let failed_ref = &failed;
    rayon::scope(|s| {
        for chunk in plan.chunks() {
            s.spawn(move |_| {
                if !chunk.range().all(f) {
                    trace!(start = chunk.start, end = chunk.end, "chunk stopped on failure");
                    failed_ref.store(true, Ordering::Relaxed);
                }
            });
        }
    });

    !failed.into_inner()
}

/// Applies `f` to every slot of `out` in parallel, passing the slot's index.
///
/// Each worker owns a disjoint sub-slice of `out`, so writes need no
/// locking. Failure handling matches [`transfer`]: slots after a failing
/// index in the same chunk are left untouched, other chunks run to the end.
pub fn transfer_into<T, F>(out: &mut [T], f: F) -> bool
where
    T: Send,
    F: Fn(usize, &mut T) -> bool + Sync,
{
    let plan = current_plan(0, out.len());
    if plan.is_empty() {
        return true;
    }
    debug!(
        len = out.len(),
        chunk_size = plan.chunk_size(),
        workers = plan.chunk_count(),
        "transfer_into"
    );

    let work: Vec<(Chunk, &mut [T])> = plan
        .chunks()
        .zip(out.chunks_mut(plan.chunk_size()))
        .collect();

    let failed = AtomicBool::new(false);
    let f = &f;
    let failed_ref = &failed;
    rayon::scope(|s| {
        for (chunk, slots) in work {
            s.spawn(move |_| {
                let complete = slots
                    .iter_mut()
                    .enumerate()
                    .all(|(offset, slot)| f(chunk.start + offset, slot));
                if !complete {
                    trace!(start = chunk.start, end = chunk.end, "chunk stopped on failure");
                    failed_ref.store(true, Ordering::Relaxed);
                }
            });
        }
    });

    !failed.into_inner()
}
