//! Checklist runner.
//!
//! The `Verifier` evaluates a checklist strictly in order, converting every
//! check-level error into a failed result with a remediation hint. No error
//! propagates out of the run loop; the only inputs are the project root, the
//! PATH entries, and the probe timeout, all injectable for tests.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::checks::checklist::{Check, CheckKind, Severity};
use crate::checks::probe;
use crate::checks::report::{CheckResult, CheckStatus, Report};
use crate::error::DoctorError;

/// Interpreter used for module-import probes.
const INTERPRETER: &str = "python3";

/// Evaluates checks against the current filesystem and environment.
pub struct Verifier {
    project_root: PathBuf,
    path_entries: Vec<PathBuf>,
    probe_timeout: Duration,
}

impl Verifier {
    /// Create a verifier for the given project root, using the system PATH.
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            path_entries: probe::parse_system_path(),
            probe_timeout: probe::PROBE_TIMEOUT,
        }
    }

    /// Override the PATH entries used for command and interpreter resolution.
    pub fn with_path_entries(mut self, entries: Vec<PathBuf>) -> Self {
        self.path_entries = entries;
        self
    }

    /// Override the probe subprocess timeout.
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Evaluate every check in order and assemble the report.
    pub fn run(&self, checklist: &[Check]) -> Report {
        let mut report = Report::new();
        for check in checklist {
            let result = self.evaluate(check);
            tracing::debug!(
                check = %check.id,
                status = ?result.status,
                "evaluated check"
            );
            report.push(result);
        }
        report
    }

    /// Evaluate a single check, converting any probe error into a failed
    /// result carrying the remediation hint for that error.
    fn evaluate(&self, check: &Check) -> CheckResult {
        match self.evaluate_kind(&check.kind) {
            Ok(detail) => CheckResult {
                check_id: check.id.clone(),
                label: check.label.clone(),
                category: check.category,
                status: CheckStatus::Pass,
                detail,
            },
            Err(err) => {
                tracing::debug!(check = %check.id, error = %err, "check failed");
                CheckResult {
                    check_id: check.id.clone(),
                    label: check.label.clone(),
                    category: check.category,
                    status: match check.severity {
                        Severity::Hard => CheckStatus::Fail,
                        Severity::Warn => CheckStatus::Warn,
                    },
                    detail: Some(remediation(&err, &check.kind)),
                }
            }
        }
    }

    /// Evaluate one check kind. Returns the optional pass detail (a captured
    /// version string) or the domain error describing what is wrong.
    ///
    /// For import checks, an absent interpreter fails the check itself; the
    /// separate interpreter check reports that condition in its own section.
    fn evaluate_kind(&self, kind: &CheckKind) -> Result<Option<String>, DoctorError> {
        match kind {
            CheckKind::FileExists { path } => {
                let full = self.resolve(path);
                if full.is_file() {
                    Ok(None)
                } else {
                    Err(DoctorError::MissingPath { path: full })
                }
            }
            CheckKind::DirectoryExists { path } => {
                let full = self.resolve(path);
                if full.is_dir() {
                    Ok(None)
                } else {
                    Err(DoctorError::MissingPath { path: full })
                }
            }
            CheckKind::ExecutableBit { path } => {
                let full = self.resolve(path);
                if !full.exists() {
                    Err(DoctorError::MissingPath { path: full })
                } else if probe::is_executable(&full) {
                    Ok(None)
                } else {
                    Err(DoctorError::NotExecutable { path: full })
                }
            }
            CheckKind::CommandAvailable {
                command,
                version_flag,
            } => match probe::resolve_tool_path(command, &self.path_entries) {
                Some(binary) => Ok(probe::capture_version(
                    &binary,
                    version_flag,
                    self.probe_timeout,
                )),
                None => Err(DoctorError::ToolNotFound {
                    tool: command.clone(),
                }),
            },
            CheckKind::ModuleImportable {
                module, search_path, ..
            } => {
                let Some(interpreter) =
                    probe::resolve_tool_path(INTERPRETER, &self.path_entries)
                else {
                    return Err(DoctorError::ToolNotFound {
                        tool: INTERPRETER.to_string(),
                    });
                };
                let inject = search_path.as_deref().map(|rel| self.resolve(rel));
                probe::import_module(&interpreter, module, inject.as_deref(), self.probe_timeout)?;
                Ok(None)
            }
        }
    }

    /// Resolve a checklist path against the project root.
    ///
    /// Absolute paths pass through untouched; the built-in checklist only
    /// uses relative ones (including the `../venv` sibling).
    fn resolve(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.project_root.join(path)
        }
    }
}

/// Derive the user-facing remediation hint for a failed check.
///
/// The check kind disambiguates errors that hint differently depending on
/// what was being probed: a missing path is phrased as file or directory, and
/// a missing interpreter on an import check appends the module's install hint.
fn remediation(err: &DoctorError, kind: &CheckKind) -> String {
    match (err, kind) {
        (DoctorError::MissingPath { path }, CheckKind::DirectoryExists { .. }) => {
            format!("Expected directory at {}", path.display())
        }
        (DoctorError::MissingPath { path }, _) => format!("Expected file at {}", path.display()),
        (DoctorError::NotExecutable { path }, _) => format!("Run: chmod +x {}", path.display()),
        (DoctorError::ToolNotFound { tool }, CheckKind::ModuleImportable { install_hint, .. }) => {
            format!("Install {} and ensure it is on PATH, then: {}", tool, install_hint)
        }
        (DoctorError::ToolNotFound { tool }, _) => {
            format!("Install {} and ensure it is on PATH", tool)
        }
        (DoctorError::ModuleImport { .. }, CheckKind::ModuleImportable { install_hint, .. }) => {
            install_hint.clone()
        }
        (err, _) => err.to_string(),
    }
}
