/*!
 * Coarse Reader/Writer Strategy
 * General-purpose rwlock with per-acquisition bookkeeping
 */

use super::traits::{LockResult, LockStrategy};
use crate::core::errors::WorkerFault;
use crate::workload::SharedMap;
use std::sync::RwLock;

/// Reader/writer exclusion via `std::sync::RwLock`
///
/// Shared acquire for reads, exclusive for writes, blocking with no
/// timeout. The std lock carries fairness and poisoning bookkeeping on
/// every acquisition, which is exactly the overhead this variant is
/// meant to expose next to the lightweight one.
pub struct CoarseRwLock {
    map: RwLock<SharedMap>,
}

impl CoarseRwLock {
    pub fn new() -> Self {
        Self {
            map: RwLock::new(SharedMap::new()),
        }
    }

    #[inline]
    fn poisoned(&self, mode: &'static str) -> WorkerFault {
        WorkerFault::Poisoned {
            strategy: self.name(),
            mode,
        }
    }
}

impl Default for CoarseRwLock {
    fn default() -> Self {
        Self::new()
    }
}

impl LockStrategy for CoarseRwLock {
    #[inline]
    fn with_read<R, F>(&self, f: F) -> LockResult<R>
    where
        F: FnOnce(&SharedMap) -> R,
    {
        let guard = self.map.read().map_err(|_| self.poisoned("read"))?;
        Ok(f(&guard))
    }

    #[inline]
    fn with_write<R, F>(&self, f: F) -> LockResult<R>
    where
        F: FnOnce(&mut SharedMap) -> R,
    {
        let mut guard = self.map.write().map_err(|_| self.poisoned("write"))?;
        Ok(f(&mut guard))
    }

    fn name(&self) -> &'static str {
        "rw-coarse"
    }
}
