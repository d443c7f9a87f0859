/*!
 * Error Types
 * Centralized error handling with thiserror and miette support
 */

use miette::Diagnostic;
use thiserror::Error;

/// Fault raised inside a reader or writer thread's loop body
///
/// Fatal to the trial it occurred in, never to the whole suite.
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum WorkerFault {
    #[error("{mode} acquire on {strategy} observed a poisoned lock")]
    #[diagnostic(
        code(bench::lock_poisoned),
        help("A previous critical section panicked while holding this lock. The trial is discarded.")
    )]
    Poisoned {
        strategy: &'static str,
        mode: &'static str,
    },

    #[error("worker thread {thread} panicked")]
    #[diagnostic(
        code(bench::worker_panicked),
        help("A workload closure panicked mid-run. The trial is discarded; remaining trials continue.")
    )]
    Panicked { thread: String },

    #[error("worker thread {thread} failed to spawn")]
    #[diagnostic(
        code(bench::spawn_failed),
        help("The OS refused to create a worker thread. Check process thread limits.")
    )]
    SpawnFailed { thread: String },
}

/// Failure of a single timed trial
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum TrialError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Worker(#[from] WorkerFault),

    #[error("timing fault: {0}")]
    #[diagnostic(
        code(bench::timing_fault),
        help("The trial ran but produced no usable measurement. It is discarded.")
    )]
    Timing(String),
}

/// Suite-level outcome when at least one strategy had failed trials
///
/// Raised by the entry point to turn inline table errors into a
/// non-zero exit code.
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
#[error("{failed} of {total} strategies had failed trials")]
#[diagnostic(
    code(bench::suite_incomplete),
    help("See the comparison table for per-strategy errors.")
)]
pub struct SuiteIncomplete {
    pub failed: usize,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_fault_display() {
        let fault = WorkerFault::Poisoned {
            strategy: "rw-coarse",
            mode: "read",
        };
        assert_eq!(
            fault.to_string(),
            "read acquire on rw-coarse observed a poisoned lock"
        );
    }

    #[test]
    fn trial_error_wraps_worker_fault() {
        let fault = WorkerFault::Panicked {
            thread: "writer-0".into(),
        };
        let err: TrialError = fault.clone().into();
        assert_eq!(err, TrialError::Worker(fault));
    }
}
