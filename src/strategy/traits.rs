/*!
 * Strategy Traits
 * Guarded access contract shared by all lock strategies
 *
 * # Design: Closure-Threading Guards
 *
 * The guards accept the critical section as a closure, so the same
 * acquire/release paths serve the benchmark workload and instrumented
 * test doubles alike. Release is RAII: a panicking closure still
 * unlocks (and poisons the std-based variants).
 */

use crate::core::errors::WorkerFault;
use crate::workload::SharedMap;

/// Result type for guarded operations
pub type LockResult<T> = Result<T, WorkerFault>;

/// A mutual-exclusion policy wrapping the shared map
///
/// Invariants every implementation upholds:
/// - At most one writer executes its critical section at a time, and
///   never concurrently with any reader.
/// - Release happens on every exit path out of the critical section,
///   including panics.
/// - Acquire blocks indefinitely; there is no timeout path. Safe here
///   because no caller holds more than one lock or nests acquisitions.
pub trait LockStrategy: Send + Sync {
    /// Run `f` under the read side of the lock
    fn with_read<R, F>(&self, f: F) -> LockResult<R>
    where
        F: FnOnce(&SharedMap) -> R;

    /// Run `f` under the write side of the lock
    fn with_write<R, F>(&self, f: F) -> LockResult<R>
    where
        F: FnOnce(&mut SharedMap) -> R;

    /// Clear the map ahead of a fresh run
    fn reset(&self) -> LockResult<()> {
        self.with_write(SharedMap::clear)
    }

    /// Number of entries currently stored
    fn entry_count(&self) -> LockResult<usize> {
        self.with_read(SharedMap::len)
    }

    /// Strategy name for reports and diagnostics
    fn name(&self) -> &'static str;
}
