//! Checks command implementation.
//!
//! The `capa-doctor checks` command lists the built-in checklist without
//! evaluating anything, for inspecting what a verification run will look at.

use crate::checks::{builtin_checklist, Category, Severity};
use crate::cli::args::ChecksArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The checks command implementation.
pub struct ChecksCommand {
    args: ChecksArgs,
}

impl ChecksCommand {
    /// Create a new checks command.
    pub fn new(args: ChecksArgs) -> Self {
        Self { args }
    }
}

impl Command for ChecksCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let checklist = builtin_checklist();

        if self.args.json {
            let json = serde_json::to_string_pretty(&checklist).map_err(anyhow::Error::from)?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header("Built-in checklist");
        for category in Category::ALL {
            let checks: Vec<_> = checklist
                .iter()
                .filter(|c| c.category == category)
                .collect();
            if checks.is_empty() {
                continue;
            }
            ui.message(&format!("{}:", category.title()));
            for check in checks {
                let marker = match check.severity {
                    Severity::Hard => "",
                    Severity::Warn => " (warn-only)",
                };
                ui.message(&format!("  {} - {}{}", check.id, check.label, marker));
            }
            ui.message("");
        }
        ui.message(&format!("{} checks total", checklist.len()));

        Ok(CommandResult::success())
    }
}
