//! Process-wide id allocation
//!
//! One `IdAllocator` should be constructed at application startup and
//! shared (by reference or `Arc`) with every component that mints ids.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use log::debug;

use crate::id::Id;

/// 2015-01-01T00:00:00Z as seconds since the Unix epoch.
const COUNTER_EPOCH_SECS: i64 = 1_420_070_400;

/// Allocates process-wide unique ids from a shared atomic counter.
///
/// `new()` seeds the counter with the whole seconds elapsed since
/// 2015-01-01T00:00:00Z, so two process runs started more than a second
/// apart begin from different counter values. This is a best-effort
/// heuristic against cross-restart collisions, not a guarantee: ids are
/// only unique within a single process lifetime.
pub struct IdAllocator {
    next: AtomicU64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    /// Create an allocator seeded from the wall clock.
    pub fn new() -> Self {
        let seed = (Utc::now().timestamp() - COUNTER_EPOCH_SECS).max(0) as u64;
        debug!("id allocator seeded with {}", seed);
        Self::with_seed(seed)
    }

    /// Create an allocator starting from an explicit seed. The first
    /// allocated id is `seed + 1`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            next: AtomicU64::new(seed),
        }
    }

    /// Allocate the next id.
    ///
    /// Safe to call from any number of threads: every call observes a
    /// distinct counter value. Sequential calls on one thread return
    /// strictly increasing ids (until the counter wraps at u64::MAX,
    /// which is not handled specially).
    pub fn allocate(&self) -> Id {
        Id::new(self.next.fetch_add(1, Ordering::SeqCst).wrapping_add(1))
    }
}
