//! Aggregated pass/fail tally for a smoke run.

/// Tally of scenario results across a run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Number of scenarios that passed.
    pub passed: usize,
    /// Number of scenarios that failed.
    pub failed: usize,
}

impl RunSummary {
    /// Create an empty tally
    #[must_use]
    pub fn new() -> Self {
        Self {
            passed: 0,
            failed: 0,
        }
    }

    /// Record one scenario result
    pub fn record(&mut self, passed: bool) {
        if passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    /// Merge another tally
    pub fn merge(&mut self, other: Self) {
        self.passed += other.passed;
        self.failed += other.failed;
    }

    /// Whether no scenario failed
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Total number of recorded scenarios
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }
}

impl Default for RunSummary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary_passes() {
        let summary = RunSummary::new();
        assert!(summary.all_passed());
        assert_eq!(summary.total(), 0);
    }

    #[test]
    fn test_record_counts_results() {
        let mut summary = RunSummary::new();
        summary.record(true);
        summary.record(false);
        summary.record(true);

        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.total(), 3);
        assert!(!summary.all_passed());
    }

    #[test]
    fn test_merge_combines_tallies() {
        let mut first = RunSummary::new();
        first.record(true);
        first.record(true);

        let mut second = RunSummary::new();
        second.record(false);

        first.merge(second);
        assert_eq!(first.passed, 2);
        assert_eq!(first.failed, 1);
        assert!(!first.all_passed());
    }
}
