/*!
 * Exclusive Strategy
 * Single mutex for readers and writers alike (baseline)
 */

use super::traits::{LockResult, LockStrategy};
use crate::core::errors::WorkerFault;
use crate::workload::SharedMap;
use std::sync::{Mutex, MutexGuard};

/// Baseline strategy with no read parallelism
///
/// Both guarded operations take the one mutex exclusively, so readers
/// block each other exactly as writers do. Everything else is measured
/// against this.
pub struct ExclusiveLock {
    map: Mutex<SharedMap>,
}

impl ExclusiveLock {
    pub fn new() -> Self {
        Self {
            map: Mutex::new(SharedMap::new()),
        }
    }

    #[inline]
    fn lock(&self) -> LockResult<MutexGuard<'_, SharedMap>> {
        self.map.lock().map_err(|_| WorkerFault::Poisoned {
            strategy: self.name(),
            mode: "exclusive",
        })
    }
}

impl Default for ExclusiveLock {
    fn default() -> Self {
        Self::new()
    }
}

impl LockStrategy for ExclusiveLock {
    #[inline]
    fn with_read<R, F>(&self, f: F) -> LockResult<R>
    where
        F: FnOnce(&SharedMap) -> R,
    {
        let guard = self.lock()?;
        Ok(f(&guard))
    }

    #[inline]
    fn with_write<R, F>(&self, f: F) -> LockResult<R>
    where
        F: FnOnce(&mut SharedMap) -> R,
    {
        let mut guard = self.lock()?;
        Ok(f(&mut guard))
    }

    fn name(&self) -> &'static str {
        "exclusive"
    }
}
