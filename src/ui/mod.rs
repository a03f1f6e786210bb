//! Terminal output components.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] for capturing output in tests
//! - The status glyph vocabulary and color theme
//!
//! # Example
//!
//! ```
//! use capa_doctor::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(OutputMode::Quiet);
//! ui.show_header("CAPA Demo Verification");
//! ui.success("All checks passed");
//! ```

pub mod icons;
pub mod mock;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, DoctorTheme};

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show the full grouped report with check ids on every line.
    Verbose,
    /// Show the full grouped report.
    #[default]
    Normal,
    /// Show only the summary and remediation hints.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows the per-check report sections.
    pub fn shows_sections(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}

/// Trait for terminal output interactions.
///
/// This trait allows mocking the output in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a check line with its status glyph and optional detail.
    fn show_check(&mut self, status: StatusKind, label: &str, detail: Option<&str>);
}

/// Create the terminal UI for the given output mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_and_verbose_show_sections() {
        assert!(OutputMode::Normal.shows_sections());
        assert!(OutputMode::Verbose.shows_sections());
        assert!(!OutputMode::Quiet.shows_sections());
    }

    #[test]
    fn create_ui_returns_usable_interface() {
        let ui = create_ui(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
