/*!
 * Comparative Report
 * Human-readable ranking of strategy timings
 */

use super::stats::Aggregate;
use crate::core::errors::TrialError;
use crate::strategy::StrategyKind;
use std::cmp::Ordering;
use std::fmt::Write;
use std::time::Duration;

/// Per-strategy outcome of a suite
#[derive(Debug, Clone)]
pub struct StrategyReport {
    pub kind: StrategyKind,
    pub stats: Aggregate,
    /// First error observed across this strategy's trials, if any
    pub error: Option<TrialError>,
    /// Trials that failed to produce a measurement
    pub failed_trials: u32,
}

impl StrategyReport {
    pub fn is_complete(&self) -> bool {
        self.failed_trials == 0
    }
}

/// Outcome of a full suite across all strategies
#[derive(Debug, Clone)]
pub struct SuiteReport {
    pub strategies: Vec<StrategyReport>,
}

impl SuiteReport {
    /// Strategies ranked fastest first; failed ones sink to the bottom
    pub fn ranked(&self) -> Vec<&StrategyReport> {
        let mut rows: Vec<&StrategyReport> = self.strategies.iter().collect();
        rows.sort_by(|a, b| match (a.is_complete(), b.is_complete()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => a.stats.mean().cmp(&b.stats.mean()),
        });
        rows
    }

    /// Number of strategies with at least one failed trial
    pub fn failed_count(&self) -> usize {
        self.strategies
            .iter()
            .filter(|report| !report.is_complete())
            .count()
    }

    /// Render the comparison table
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<12} {:>14} {:>14} {:>14} {:>8}",
            "strategy", "mean", "err", "stddev", "trials"
        );
        let _ = writeln!(out, "{}", "-".repeat(66));

        for row in self.ranked() {
            if row.stats.count() == 0 {
                let reason = row
                    .error
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "no measured trials".to_owned());
                let _ = writeln!(out, "{:<12} failed: {reason}", row.kind.label());
                continue;
            }

            let _ = write!(
                out,
                "{:<12} {:>14} {:>14} {:>14} {:>8}",
                row.kind.label(),
                format_duration(row.stats.mean()),
                format!("±{}", format_duration(row.stats.std_error())),
                format_duration(row.stats.stddev()),
                row.stats.count(),
            );
            match &row.error {
                Some(error) => {
                    let _ = writeln!(out, "  ({} failed: {error})", row.failed_trials);
                }
                None => {
                    let _ = writeln!(out);
                }
            }
        }

        out
    }
}

fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs >= 1.0 {
        format!("{secs:.3} s")
    } else if secs >= 1e-3 {
        format!("{:.3} ms", secs * 1e3)
    } else {
        format!("{:.2} µs", secs * 1e6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::WorkerFault;
    use pretty_assertions::assert_eq;

    fn complete_report(kind: StrategyKind, millis: &[u64]) -> StrategyReport {
        let mut stats = Aggregate::new();
        for &ms in millis {
            stats.record(Duration::from_millis(ms));
        }
        StrategyReport {
            kind,
            stats,
            error: None,
            failed_trials: 0,
        }
    }

    #[test]
    fn ranking_is_fastest_first() {
        let suite = SuiteReport {
            strategies: vec![
                complete_report(StrategyKind::Exclusive, &[300, 310]),
                complete_report(StrategyKind::LightRw, &[100, 110]),
                complete_report(StrategyKind::CoarseRw, &[200, 210]),
            ],
        };

        let order: Vec<StrategyKind> = suite.ranked().iter().map(|r| r.kind).collect();
        assert_eq!(
            order,
            vec![
                StrategyKind::LightRw,
                StrategyKind::CoarseRw,
                StrategyKind::Exclusive
            ]
        );
    }

    #[test]
    fn failed_strategies_sink_to_the_bottom() {
        let failed = StrategyReport {
            kind: StrategyKind::LightRw,
            stats: Aggregate::new(),
            error: Some(TrialError::Worker(WorkerFault::Panicked {
                thread: "writer-0".into(),
            })),
            failed_trials: 3,
        };
        let suite = SuiteReport {
            strategies: vec![failed, complete_report(StrategyKind::Exclusive, &[500])],
        };

        let ranked = suite.ranked();
        assert_eq!(ranked[0].kind, StrategyKind::Exclusive);
        assert_eq!(ranked[1].kind, StrategyKind::LightRw);
        assert_eq!(suite.failed_count(), 1);
    }

    #[test]
    fn render_lists_every_strategy() {
        let suite = SuiteReport {
            strategies: vec![
                complete_report(StrategyKind::Exclusive, &[300]),
                complete_report(StrategyKind::CoarseRw, &[200]),
                complete_report(StrategyKind::LightRw, &[100]),
            ],
        };

        let table = suite.render();
        for kind in StrategyKind::all() {
            assert!(table.contains(kind.label()), "missing {kind} in:\n{table}");
        }
    }

    #[test]
    fn render_marks_failed_strategies_inline() {
        let failed = StrategyReport {
            kind: StrategyKind::CoarseRw,
            stats: Aggregate::new(),
            error: Some(TrialError::Timing("elapsed time read as zero".into())),
            failed_trials: 1,
        };
        let suite = SuiteReport {
            strategies: vec![failed],
        };

        let table = suite.render();
        assert!(table.contains("failed"));
        assert!(table.contains("elapsed time read as zero"));
    }
}
