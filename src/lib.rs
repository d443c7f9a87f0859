/*!
 * Lock Throughput Bench
 * Harness for comparing mutual-exclusion strategies over a contended map
 */

pub mod core;
pub mod driver;
pub mod harness;
pub mod strategy;
pub mod telemetry;
pub mod workload;

// Re-exports
pub use crate::core::errors::{SuiteIncomplete, TrialError, WorkerFault};
pub use driver::{run_suite, Aggregate, StrategyReport, SuiteReport, TrialProtocol};
pub use harness::{measure, measure_strategy, RunConfig, RunContext, RunResult};
pub use strategy::{
    CoarseRwLock, ExclusiveLock, GuardedMap, LightRwLock, LockResult, LockStrategy, StrategyKind,
};
pub use telemetry::init_tracing;
pub use workload::{read_pass, spin_work, write_pass, SharedMap, WorkloadProfile};
