use indexmap::IndexMap;

use crate::report::{CaseStatus, TestBinary, TestReport};

/// Pass/fail accounting for one unique binary path. `failure_paths` holds
/// the failing case paths in discovery order across merged entries, and is
/// never longer than `total_cases`.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct AggregateResult {
    pub total_cases: usize,
    pub failure_paths: Vec<String>,
}

impl AggregateResult {
    pub fn passed(&self) -> usize {
        self.total_cases - self.failure_paths.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failure_paths.is_empty()
    }
}

/// Counts cases and collects failing case paths for a single binary entry.
/// Skipped cases are excluded from both. No cross-entry merging happens here.
pub fn aggregate_binary(binary: &TestBinary) -> (usize, Vec<String>) {
    let mut cases = 0;
    let mut failures = Vec::new();

    for case in &binary.cases {
        match &case.status {
            CaseStatus::Skipped => continue,
            CaseStatus::Success => cases += 1,
            CaseStatus::Failure(_) => {
                cases += 1;
                failures.push(case.path.clone());
            }
        }
    }

    (cases, failures)
}

/// Aggregates a whole report into an insertion-ordered mapping from binary
/// path to result. Entries sharing a path are merged in document order: case
/// counts summed, failure lists concatenated.
pub fn aggregate_report(report: &TestReport) -> IndexMap<String, AggregateResult> {
    let mut results: IndexMap<String, AggregateResult> = IndexMap::new();

    for binary in &report.binaries {
        let (cases, failures) = aggregate_binary(binary);
        let entry = results
            .entry(binary.path.clone())
            .or_insert_with(AggregateResult::default);
        entry.total_cases += cases;
        entry.failure_paths.extend(failures);
    }

    results
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod aggregate_tests;
