/*!
 * Thread Harness
 * Spawns the reader/writer topology over a strategy and times the run
 *
 * The harness performs no locking of its own; exclusion is entirely the
 * strategy's responsibility. It guarantees that when `measure` returns,
 * every workload invocation has completed exactly once and all worker
 * threads have been joined.
 */

mod config;

pub use config::RunConfig;
pub(crate) use config::env_or;

use crate::core::errors::WorkerFault;
use crate::strategy::{GuardedMap, StrategyKind};
use std::thread;
use std::time::{Duration, Instant};
use tracing::trace;

/// Shared state for one run: the guarded map plus its configuration
///
/// Constructed fresh per trial and discarded after, so nothing leaks
/// across runs and independent trials could even run in parallel.
pub struct RunContext {
    pub config: RunConfig,
    pub strategy: GuardedMap,
}

impl RunContext {
    pub fn new(kind: StrategyKind, config: RunConfig) -> Self {
        Self {
            config,
            strategy: GuardedMap::new(kind),
        }
    }
}

/// Wall-clock outcome of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunResult {
    pub elapsed: Duration,
}

/// Run the full reader/writer topology once and time it
///
/// Spawns `config.readers` threads looping `config.iterations` times
/// over `reader_op` and `config.writers` threads likewise over
/// `writer_op`, then joins them all. Start order across threads is
/// unspecified. All threads are joined even when one faults; the first
/// fault observed wins. On success, exactly
/// `iterations x (readers + writers)` invocations have completed.
pub fn measure<R, W>(
    config: &RunConfig,
    reader_op: R,
    writer_op: W,
) -> Result<RunResult, WorkerFault>
where
    R: Fn() -> Result<(), WorkerFault> + Send + Sync,
    W: Fn() -> Result<(), WorkerFault> + Send + Sync,
{
    let iterations = config.iterations;
    let started = Instant::now();

    thread::scope(|scope| {
        let mut workers = Vec::with_capacity(config.readers + config.writers);
        let mut fault: Option<WorkerFault> = None;

        for n in 0..config.readers {
            let reader_op = &reader_op;
            match thread::Builder::new()
                .name(format!("reader-{n}"))
                .spawn_scoped(scope, move || worker_loop(iterations, reader_op))
            {
                Ok(handle) => workers.push(handle),
                Err(_) => {
                    fault.get_or_insert(WorkerFault::SpawnFailed {
                        thread: format!("reader-{n}"),
                    });
                }
            }
        }

        for n in 0..config.writers {
            let writer_op = &writer_op;
            match thread::Builder::new()
                .name(format!("writer-{n}"))
                .spawn_scoped(scope, move || worker_loop(iterations, writer_op))
            {
                Ok(handle) => workers.push(handle),
                Err(_) => {
                    fault.get_or_insert(WorkerFault::SpawnFailed {
                        thread: format!("writer-{n}"),
                    });
                }
            }
        }

        for handle in workers {
            let name = handle.thread().name().unwrap_or("worker").to_owned();
            match handle.join() {
                Ok(Ok(())) => {}
                Ok(Err(worker_fault)) => {
                    fault.get_or_insert(worker_fault);
                }
                Err(_) => {
                    fault.get_or_insert(WorkerFault::Panicked { thread: name });
                }
            }
        }

        match fault {
            Some(fault) => Err(fault),
            None => Ok(()),
        }
    })?;

    let elapsed = started.elapsed();
    trace!(
        elapsed_us = elapsed.as_micros() as u64,
        invocations = config.total_invocations(),
        "run complete"
    );
    Ok(RunResult { elapsed })
}

fn worker_loop<F>(iterations: u32, op: &F) -> Result<(), WorkerFault>
where
    F: Fn() -> Result<(), WorkerFault>,
{
    for _ in 0..iterations {
        op()?;
    }
    Ok(())
}

/// Reset the context's shared state, then measure its strategy's
/// guarded workload
pub fn measure_strategy(ctx: &RunContext) -> Result<RunResult, WorkerFault> {
    ctx.strategy.reset()?;
    let profile = ctx.config.workload_profile();
    measure(
        &ctx.config,
        || ctx.strategy.guarded_read(&profile),
        || ctx.strategy.guarded_write(&profile),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn tiny_config() -> RunConfig {
        RunConfig {
            iterations: 100,
            readers: 2,
            writers: 1,
            read_payload: 0,
            write_payload: 0,
        }
    }

    #[test]
    fn measure_runs_every_invocation() {
        let config = tiny_config();
        let calls = AtomicU64::new(0);

        let result = measure(
            &config,
            || {
                calls.fetch_add(1, Ordering::Relaxed);
                Ok(())
            },
            || {
                calls.fetch_add(1, Ordering::Relaxed);
                Ok(())
            },
        )
        .unwrap();

        assert_eq!(calls.load(Ordering::Relaxed), config.total_invocations());
        assert!(result.elapsed > Duration::ZERO);
    }

    #[test]
    fn worker_fault_fails_the_run() {
        let config = tiny_config();
        let outcome = measure(
            &config,
            || Ok(()),
            || {
                Err(WorkerFault::Panicked {
                    thread: "injected".into(),
                })
            },
        );
        assert!(matches!(outcome, Err(WorkerFault::Panicked { .. })));
    }

    #[test]
    fn worker_panic_is_reported_with_thread_name() {
        let config = RunConfig {
            readers: 1,
            writers: 1,
            ..tiny_config()
        };
        let outcome = measure(&config, || Ok(()), || panic!("writer exploded"));
        match outcome {
            Err(WorkerFault::Panicked { thread }) => assert_eq!(thread, "writer-0"),
            other => panic!("expected a panic fault, got {other:?}"),
        }
    }
}
