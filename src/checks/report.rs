//! Check outcomes and the aggregate report.
//!
//! Each evaluated check produces a [`CheckResult`]; the [`Report`] collects
//! them in checklist order and maintains the pass/fail/warn tallies. The
//! whole structure serializes for `--json` output.

use serde::Serialize;

use super::checklist::Category;

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// Check passed.
    Pass,
    /// Hard check failed; forces a nonzero exit.
    Fail,
    /// Warn-only check failed; reported but never affects exit status.
    Warn,
}

/// The result of evaluating one check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    /// Id of the check that produced this result.
    pub check_id: String,
    /// Human-readable description, carried over from the check.
    pub label: String,
    /// Report section, carried over from the check.
    pub category: Category,
    /// Pass/fail/warn outcome.
    pub status: CheckStatus,
    /// Resolved version string on pass, remediation hint on fail/warn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl CheckResult {
    /// Whether this result counts as a failure for exit-status purposes.
    pub fn is_failure(&self) -> bool {
        self.status == CheckStatus::Fail
    }
}

/// Ordered collection of check results plus aggregate tallies.
///
/// Invariant: `passed + failed + warned` equals the number of results.
#[derive(Debug, Default, Serialize)]
pub struct Report {
    results: Vec<CheckResult>,
    passed: usize,
    failed: usize,
    warned: usize,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result, updating the tallies.
    pub fn push(&mut self, result: CheckResult) {
        match result.status {
            CheckStatus::Pass => self.passed += 1,
            CheckStatus::Fail => self.failed += 1,
            CheckStatus::Warn => self.warned += 1,
        }
        self.results.push(result);
    }

    /// Results in checklist order.
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Results belonging to one report section, in checklist order.
    pub fn results_in(&self, category: Category) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(move |r| r.category == category)
    }

    /// Number of passed checks.
    pub fn passed(&self) -> usize {
        self.passed
    }

    /// Number of failed hard checks.
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Number of failed warn-only checks.
    pub fn warned(&self) -> usize {
        self.warned
    }

    /// Whether verification succeeded: no hard check failed. Warnings are
    /// permitted.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Remediation hints from every failed hard check, in checklist order.
    pub fn remediation_hints(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| r.is_failure())
            .filter_map(|r| r.detail.as_deref())
            .collect()
    }
}
