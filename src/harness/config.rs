/*!
 * Run Configuration
 * Immutable per-run parameters, fixed across strategies for fairness
 */

use crate::workload::WorkloadProfile;
use std::str::FromStr;

/// Parameters of one measured run
///
/// Held constant across all strategies within a suite so the comparison
/// is fair. Defaults mirror the canonical workload: five readers and
/// one writer, each looping 100k iterations with 100 spin units per
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Loop count per thread; also bounds the key domain [0, iterations)
    pub iterations: u32,
    /// Reader thread count
    pub readers: usize,
    /// Writer thread count
    pub writers: usize,
    /// Spin units per read operation
    pub read_payload: u32,
    /// Spin units per write operation
    pub write_payload: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            iterations: 100_000,
            readers: 5,
            writers: 1,
            read_payload: 100,
            write_payload: 100,
        }
    }
}

impl RunConfig {
    /// Defaults overridden by LOCK_BENCH_* environment variables
    ///
    /// Unset or unparsable values fall back to the default for that
    /// field.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            iterations: env_or("LOCK_BENCH_ITERATIONS", defaults.iterations),
            readers: env_or("LOCK_BENCH_READERS", defaults.readers),
            writers: env_or("LOCK_BENCH_WRITERS", defaults.writers),
            read_payload: env_or("LOCK_BENCH_READ_PAYLOAD", defaults.read_payload),
            write_payload: env_or("LOCK_BENCH_WRITE_PAYLOAD", defaults.write_payload),
        }
    }

    /// Per-operation parameters handed to the workload functions
    pub fn workload_profile(&self) -> WorkloadProfile {
        WorkloadProfile {
            key_space: self.iterations.max(1),
            read_payload: self.read_payload,
            write_payload: self.write_payload,
        }
    }

    /// Total workload invocations one run must perform
    pub fn total_invocations(&self) -> u64 {
        u64::from(self.iterations) * (self.readers + self.writers) as u64
    }
}

pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
