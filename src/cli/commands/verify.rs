//! Verify command implementation.
//!
//! The `capa-doctor verify` command runs the built-in checklist against the
//! project root and renders the grouped report. It is also the default when
//! no subcommand is given.

use std::path::{Path, PathBuf};

use crate::checks::{builtin_checklist, Category, Report, Verifier};
use crate::cli::args::VerifyArgs;
use crate::error::Result;
use crate::ui::{OutputMode, StatusKind, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The verify command implementation.
pub struct VerifyCommand {
    project_root: PathBuf,
    args: VerifyArgs,
}

impl VerifyCommand {
    /// Create a new verify command.
    pub fn new(project_root: &Path, args: VerifyArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    fn render(&self, report: &Report, ui: &mut dyn UserInterface) {
        // Quiet mode prints only the summary and hints below.
        if ui.output_mode().shows_sections() {
            let verbose = ui.output_mode() == OutputMode::Verbose;
            ui.show_header("CAPA Demo Verification");

            for category in Category::ALL {
                let results: Vec<_> = report.results_in(category).collect();
                if results.is_empty() {
                    continue;
                }
                ui.message(&format!("{}:", category.title()));
                for result in results {
                    let label = if verbose {
                        format!("{} [{}]", result.label, result.check_id)
                    } else {
                        result.label.clone()
                    };
                    ui.show_check(
                        StatusKind::from(result.status),
                        &label,
                        result.detail.as_deref(),
                    );
                }
                ui.message("");
            }
        }

        ui.message(&format!(
            "Summary: {} passed, {} failed, {} warnings",
            report.passed(),
            report.failed(),
            report.warned()
        ));

        if report.is_success() {
            ui.success("Environment looks good. Run ./run_demo.sh to start the demo.");
            if report.warned() > 0 {
                ui.warning("Some optional checks did not pass; see the report above.");
            }
        } else {
            ui.error(&format!("{} check(s) failed", report.failed()));
            for hint in report.remediation_hints() {
                ui.message(&format!("  - {}", hint));
            }
        }
    }
}

impl Command for VerifyCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let checklist = builtin_checklist();
        let verifier = Verifier::new(&self.project_root);

        tracing::debug!(
            project_root = %self.project_root.display(),
            checks = checklist.len(),
            "running verification"
        );
        let report = verifier.run(&checklist);

        if self.args.json {
            let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            ui.message(&json);
        } else {
            self.render(&report, ui);
        }

        if report.is_success() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
