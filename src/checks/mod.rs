//! Environment verification: checklist, probes, runner, and report.

pub mod checklist;
pub mod probe;
pub mod report;
pub mod runner;

pub use checklist::{builtin_checklist, Category, Check, CheckKind, Severity};
pub use report::{CheckResult, CheckStatus, Report};
pub use runner::Verifier;
