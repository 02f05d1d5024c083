//! Single-slot content cache
//!
//! Each composite wrapper owns one `ContentCell`: a clearable memoization
//! slot holding the wrapper's decoded content array. The slot is populated on
//! first access and may be cleared at any time; recomputation is safe because
//! content collection is a pure function of (graph state at call time, key).
//!
//! ## Concurrency
//!
//! `get_or_compute` tolerates the benign race where two threads compute
//! content concurrently: both compute, one result wins, the loser is
//! discarded. The returned array is always internally consistent, never torn.
//! This is the at-most-effectively-once discipline the cache contract allows;
//! content collection is cheap enough that fetch deduplication (in-flight
//! tracking) is not worth the bookkeeping here.
//!
//! Collection is call-stack-bound, so a cycle in the decoded structure shows
//! up as re-entry into a cell whose computation is still running on the same
//! thread. `get_or_compute` tracks in-progress cells per thread and rejects
//! re-entry as a malformed structure instead of recursing unboundedly.

use crate::content::ContentItem;
use crate::error::{Error, Result};
use rustc_hash::FxHashSet;
use std::cell::RefCell;
use std::sync::atomic::{AtomicU64, Ordering::Relaxed};
use std::sync::Arc;
use std::sync::RwLock;

thread_local! {
    /// Cells whose compute closure is running on this thread's call stack
    static DECODING: RefCell<FxHashSet<usize>> = RefCell::new(FxHashSet::default());
}

/// A clearable single-slot memoization cell for a content array
#[derive(Debug, Default)]
pub struct ContentCell {
    slot: RwLock<Option<Arc<[ContentItem]>>>,
}

impl ContentCell {
    /// Create an empty cell
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-forcing probe: the resident content, if any
    pub fn peek(&self) -> Option<Arc<[ContentItem]>> {
        self.slot.read().unwrap().clone()
    }

    /// Non-forcing probe: whether content is resident
    pub fn has_content(&self) -> bool {
        self.slot.read().unwrap().is_some()
    }

    /// Drop the resident content so the next access recomputes
    pub fn clear(&self) {
        *self.slot.write().unwrap() = None;
    }

    /// Pre-seed the cell with content a construction path already computed
    ///
    /// If a concurrent computation already populated the slot, the resident
    /// array wins and the seed is discarded.
    pub fn seed(&self, items: Vec<ContentItem>) -> Arc<[ContentItem]> {
        let mut slot = self.slot.write().unwrap();
        match &*slot {
            Some(existing) => existing.clone(),
            None => {
                let arc: Arc<[ContentItem]> = items.into();
                *slot = Some(arc.clone());
                arc
            }
        }
    }

    /// Get the resident content, or compute and retain it
    ///
    /// The compute closure runs outside the slot lock; a racing computation
    /// for the same cell may run concurrently and the first writer wins.
    /// Re-entering this cell from within its own compute closure means the
    /// decoded structure references itself and fails as malformed.
    pub fn get_or_compute<F>(&self, compute: F) -> Result<Arc<[ContentItem]>>
    where
        F: FnOnce() -> Result<Vec<ContentItem>>,
    {
        if let Some(resident) = self.peek() {
            return Ok(resident);
        }

        let cell_id = self as *const ContentCell as usize;
        if !DECODING.with(|d| d.borrow_mut().insert(cell_id)) {
            return Err(Error::malformed(
                "cyclic structure: content decoding re-entered its own cell",
            ));
        }
        let computed = compute();
        DECODING.with(|d| d.borrow_mut().remove(&cell_id));
        let computed = computed?;

        let mut slot = self.slot.write().unwrap();
        match &*slot {
            // Lost the race: the resident array is equivalent (pure function
            // of the same graph state), return it and discard ours.
            Some(resident) => Ok(resident.clone()),
            None => {
                let arc: Arc<[ContentItem]> = computed.into();
                *slot = Some(arc.clone());
                Ok(arc)
            }
        }
    }
}

/// Lock-free counters for content cache behavior
///
/// Kept per model so diagnostics can observe hit rates across all wrappers.
#[derive(Debug, Default)]
pub struct ContentStats {
    hits: AtomicU64,
    misses: AtomicU64,
    clears: AtomicU64,
}

impl ContentStats {
    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Relaxed);
    }

    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Relaxed);
    }

    pub(crate) fn record_clear(&self) {
        self.clears.fetch_add(1, Relaxed);
    }

    /// Snapshot the counters
    pub fn snapshot(&self) -> ContentStatsSnapshot {
        ContentStatsSnapshot {
            hits: self.hits.load(Relaxed),
            misses: self.misses.load(Relaxed),
            clears: self.clears.load(Relaxed),
        }
    }
}

/// Point-in-time view of [`ContentStats`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ContentStatsSnapshot {
    /// Content accesses served from a resident slot
    pub hits: u64,
    /// Content accesses that ran collection
    pub misses: u64,
    /// Explicit content clears
    pub clears: u64,
}

impl ContentStatsSnapshot {
    /// Hit rate as a fraction (0.0 - 1.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
