/*!
 * lockbench - Main Entry Point
 *
 * Runs the full lock-strategy comparison suite:
 * - Exclusive mutex (baseline)
 * - Coarse reader/writer lock
 * - Lightweight reader/writer lock
 * and prints a ranked comparison table to stdout.
 */

use lock_bench::{init_tracing, run_suite, RunConfig, SuiteIncomplete, TrialProtocol};
use tracing::info;

fn main() -> miette::Result<()> {
    init_tracing();

    let config = RunConfig::from_env();
    let protocol = TrialProtocol::from_env();

    info!(
        iterations = config.iterations,
        readers = config.readers,
        writers = config.writers,
        read_payload = config.read_payload,
        write_payload = config.write_payload,
        "benchmark configuration"
    );
    info!(
        warmup = protocol.warmup,
        trials = protocol.trials,
        "trial protocol"
    );

    let suite = run_suite(&config, &protocol);

    println!("{}", suite.render());

    let failed = suite.failed_count();
    if failed > 0 {
        return Err(SuiteIncomplete {
            failed,
            total: suite.strategies.len(),
        }
        .into());
    }

    info!("all strategies completed");
    Ok(())
}
