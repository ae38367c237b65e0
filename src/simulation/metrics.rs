//! Aggregate coverage statistics over simulated rounds.

use std::fmt;

use super::environment::RoundReport;

/// Coverage statistics over a run.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageSummary {
    /// Number of rounds summarized.
    pub n_rounds: usize,
    /// Mean coverage after each round.
    pub mean_coverage: f64,
    /// Best coverage after any round.
    pub best_coverage: usize,
    /// Coverage after the last round.
    pub final_coverage: usize,
    /// Rounds where the realized coverage differed from the planner's prediction.
    pub mispredicted_rounds: usize,
}

impl CoverageSummary {
    /// Summarizes a sequence of round reports.
    pub fn from_reports(reports: &[RoundReport]) -> Self {
        let n = reports.len();
        let mean_coverage = if n > 0 {
            reports.iter().map(|r| r.coverage_after as f64).sum::<f64>() / n as f64
        } else {
            0.0
        };
        Self {
            n_rounds: n,
            mean_coverage,
            best_coverage: reports.iter().map(|r| r.coverage_after).max().unwrap_or(0),
            final_coverage: reports.last().map(|r| r.coverage_after).unwrap_or(0),
            mispredicted_rounds: reports
                .iter()
                .filter(|r| r.coverage_after != r.planned_coverage)
                .count(),
        }
    }
}

impl fmt::Display for CoverageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Coverage Summary ({} rounds) ===", self.n_rounds)?;
        writeln!(f, "  Mean coverage:   {:.2}", self.mean_coverage)?;
        writeln!(f, "  Best coverage:   {}", self.best_coverage)?;
        writeln!(f, "  Final coverage:  {}", self.final_coverage)?;
        write!(f, "  Mispredicted:    {} rounds", self.mispredicted_rounds)
    }
}
