/*!
 * Benchmark Driver
 * Warms up, repeats timed trials per strategy, and aggregates results
 *
 * A failed trial is recorded on its strategy's report and never aborts
 * the remaining trials or strategies.
 */

mod report;
mod stats;

pub use report::{StrategyReport, SuiteReport};
pub use stats::Aggregate;

use crate::core::errors::TrialError;
use crate::harness::{env_or, measure_strategy, RunConfig, RunContext};
use crate::strategy::StrategyKind;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Number of warm-up and measured trials per strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialProtocol {
    /// Unmeasured runs before timing starts
    pub warmup: u32,
    /// Measured runs folded into the aggregate
    pub trials: u32,
}

impl Default for TrialProtocol {
    fn default() -> Self {
        Self {
            warmup: 3,
            trials: 10,
        }
    }
}

impl TrialProtocol {
    /// Defaults overridden by LOCK_BENCH_WARMUP / LOCK_BENCH_TRIALS
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            warmup: env_or("LOCK_BENCH_WARMUP", defaults.warmup),
            trials: env_or("LOCK_BENCH_TRIALS", defaults.trials),
        }
    }
}

/// Run the full suite: every strategy, warmed up and repeated
pub fn run_suite(config: &RunConfig, protocol: &TrialProtocol) -> SuiteReport {
    let strategies = StrategyKind::all()
        .into_iter()
        .map(|kind| run_strategy(kind, config, protocol))
        .collect();
    SuiteReport { strategies }
}

fn run_strategy(kind: StrategyKind, config: &RunConfig, protocol: &TrialProtocol) -> StrategyReport {
    info!(
        strategy = %kind,
        warmup = protocol.warmup,
        trials = protocol.trials,
        "measuring strategy"
    );

    let mut report = StrategyReport {
        kind,
        stats: Aggregate::new(),
        error: None,
        failed_trials: 0,
    };

    for round in 0..protocol.warmup {
        // Warm-up runs are discarded either way; only trials decide
        let ctx = RunContext::new(kind, *config);
        match measure_strategy(&ctx) {
            Ok(result) => debug!(
                strategy = %kind,
                round,
                elapsed_us = result.elapsed.as_micros() as u64,
                "warm-up run"
            ),
            Err(fault) => warn!(strategy = %kind, round, error = %fault, "warm-up run failed"),
        }
    }

    for trial in 0..protocol.trials {
        let ctx = RunContext::new(kind, *config);
        match run_trial(&ctx) {
            Ok(elapsed) => {
                debug!(
                    strategy = %kind,
                    trial,
                    elapsed_us = elapsed.as_micros() as u64,
                    "trial complete"
                );
                report.stats.record(elapsed);
            }
            Err(error) => {
                warn!(strategy = %kind, trial, error = %error, "trial failed");
                report.failed_trials += 1;
                report.error.get_or_insert(error);
            }
        }
    }

    report
}

/// One measured trial on a fresh context
fn run_trial(ctx: &RunContext) -> Result<Duration, TrialError> {
    let result = measure_strategy(ctx)?;
    if result.elapsed.is_zero() {
        // The run happened but the clock produced nothing usable
        return Err(TrialError::Timing("elapsed time read as zero".into()));
    }
    Ok(result.elapsed)
}
