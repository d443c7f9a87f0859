/*!
 * Lock Strategies
 * Three interchangeable mutual-exclusion policies over the shared map
 *
 * - Exclusive: one mutex, no read parallelism (baseline)
 * - Coarse rw: std rwlock, shared reads with acquisition bookkeeping
 * - Lightweight rw: parking_lot rwlock, fast uncontended path
 *
 * # Design: Enum Dispatch
 *
 * `GuardedMap` dispatches over a closed enum of strategies instead of
 * `Arc<dyn LockStrategy>`. The guarded calls sit on the hot path of
 * every workload iteration; enum dispatch keeps them inlinable and free
 * of vtable indirection. The trait remains for uniformity and for
 * custom strategies in tests.
 */

mod coarse;
mod exclusive;
mod light;
mod traits;

pub use coarse::CoarseRwLock;
pub use exclusive::ExclusiveLock;
pub use light::LightRwLock;
pub use traits::{LockResult, LockStrategy};

use crate::workload::{read_pass, write_pass, SharedMap, WorkloadProfile};
use std::fmt;

/// Strategy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Single exclusive mutex
    Exclusive,
    /// General-purpose reader/writer lock (std)
    CoarseRw,
    /// Lightweight reader/writer lock (parking_lot)
    LightRw,
}

impl StrategyKind {
    /// All strategies in fixed comparison order
    pub const fn all() -> [StrategyKind; 3] {
        [
            StrategyKind::Exclusive,
            StrategyKind::CoarseRw,
            StrategyKind::LightRw,
        ]
    }

    /// Stable label used in reports and benchmark IDs
    pub const fn label(&self) -> &'static str {
        match self {
            StrategyKind::Exclusive => "exclusive",
            StrategyKind::CoarseRw => "rw-coarse",
            StrategyKind::LightRw => "rw-light",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Strategy implementation (enum dispatch, no vtable on the hot path)
enum StrategyImpl {
    Exclusive(ExclusiveLock),
    Coarse(CoarseRwLock),
    Light(LightRwLock),
}

/// The shared map wrapped in a selected lock strategy
///
/// One `GuardedMap` backs one run; construct it fresh per trial so no
/// state leaks across runs.
pub struct GuardedMap {
    kind: StrategyKind,
    strategy: StrategyImpl,
}

impl GuardedMap {
    pub fn new(kind: StrategyKind) -> Self {
        let strategy = match kind {
            StrategyKind::Exclusive => StrategyImpl::Exclusive(ExclusiveLock::new()),
            StrategyKind::CoarseRw => StrategyImpl::Coarse(CoarseRwLock::new()),
            StrategyKind::LightRw => StrategyImpl::Light(LightRwLock::new()),
        };
        Self { kind, strategy }
    }

    pub const fn kind(&self) -> StrategyKind {
        self.kind
    }

    /// Run `f` under the read side of the selected strategy
    #[inline]
    pub fn with_read<R, F>(&self, f: F) -> LockResult<R>
    where
        F: FnOnce(&SharedMap) -> R,
    {
        match &self.strategy {
            StrategyImpl::Exclusive(s) => s.with_read(f),
            StrategyImpl::Coarse(s) => s.with_read(f),
            StrategyImpl::Light(s) => s.with_read(f),
        }
    }

    /// Run `f` under the write side of the selected strategy
    #[inline]
    pub fn with_write<R, F>(&self, f: F) -> LockResult<R>
    where
        F: FnOnce(&mut SharedMap) -> R,
    {
        match &self.strategy {
            StrategyImpl::Exclusive(s) => s.with_write(f),
            StrategyImpl::Coarse(s) => s.with_write(f),
            StrategyImpl::Light(s) => s.with_write(f),
        }
    }

    /// One guarded reader workload pass
    #[inline]
    pub fn guarded_read(&self, profile: &WorkloadProfile) -> LockResult<()> {
        self.with_read(|map| read_pass(map, profile))
    }

    /// One guarded writer workload pass
    #[inline]
    pub fn guarded_write(&self, profile: &WorkloadProfile) -> LockResult<()> {
        self.with_write(|map| write_pass(map, profile))
    }

    /// Clear the map ahead of a fresh run
    pub fn reset(&self) -> LockResult<()> {
        match &self.strategy {
            StrategyImpl::Exclusive(s) => s.reset(),
            StrategyImpl::Coarse(s) => s.reset(),
            StrategyImpl::Light(s) => s.reset(),
        }
    }

    /// Number of entries currently stored
    pub fn entry_count(&self) -> LockResult<usize> {
        match &self.strategy {
            StrategyImpl::Exclusive(s) => s.entry_count(),
            StrategyImpl::Coarse(s) => s.entry_count(),
            StrategyImpl::Light(s) => s.entry_count(),
        }
    }

    pub fn name(&self) -> &'static str {
        match &self.strategy {
            StrategyImpl::Exclusive(s) => s.name(),
            StrategyImpl::Coarse(s) => s.name(),
            StrategyImpl::Light(s) => s.name(),
        }
    }
}
