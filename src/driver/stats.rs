/*!
 * Trial Statistics
 * Running mean/variance over trial durations
 *
 * Strategy: stream samples through Welford's online algorithm so no
 * trial history is stored.
 */

use std::time::Duration;

/// Running aggregate of trial durations
///
/// Variance is the sample variance (n - 1 denominator); the reported
/// error margin is the standard error of the mean.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregate {
    count: u64,
    mean: f64,
    m2: f64,
}

impl Aggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one trial duration into the aggregate
    pub fn record(&mut self, sample: Duration) {
        let value = sample.as_secs_f64();
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn mean(&self) -> Duration {
        Duration::from_secs_f64(self.mean.max(0.0))
    }

    /// Sample variance in seconds squared
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    pub fn stddev(&self) -> Duration {
        Duration::from_secs_f64(self.variance().sqrt())
    }

    /// Standard error of the mean (the reported +/- margin)
    pub fn std_error(&self) -> Duration {
        if self.count == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.variance().sqrt() / (self.count as f64).sqrt())
    }
}
