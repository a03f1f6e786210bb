//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all output for
//! later assertion.
//!
//! # Example
//!
//! ```
//! use capa_doctor::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Running checks");
//! ui.success("Done!");
//!
//! assert!(ui.messages().contains(&"Running checks".to_string()));
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use super::{OutputMode, StatusKind, UserInterface};

/// Mock UI implementation for testing. Captures all output.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    checks: Vec<(StatusKind, String, Option<String>)>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured check lines.
    pub fn checks(&self) -> &[(StatusKind, String, Option<String>)] {
        &self.checks
    }

    /// Check lines captured with the given status.
    pub fn checks_with_status(&self, status: StatusKind) -> Vec<&str> {
        self.checks
            .iter()
            .filter(|(s, _, _)| *s == status)
            .map(|(_, label, _)| label.as_str())
            .collect()
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_check(&mut self, status: StatusKind, label: &str, detail: Option<&str>) {
        self.checks
            .push((status, label.to_string(), detail.map(String::from)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_captures_all_output_kinds() {
        let mut ui = MockUI::new();
        ui.message("msg");
        ui.success("ok");
        ui.warning("careful");
        ui.error("bad");
        ui.show_header("title");
        ui.show_check(StatusKind::Success, "rxconfig.py", Some("found"));

        assert_eq!(ui.messages(), &["msg".to_string()]);
        assert_eq!(ui.successes(), &["ok".to_string()]);
        assert_eq!(ui.warnings(), &["careful".to_string()]);
        assert_eq!(ui.errors(), &["bad".to_string()]);
        assert_eq!(ui.headers(), &["title".to_string()]);
        assert_eq!(ui.checks().len(), 1);
    }

    #[test]
    fn checks_with_status_filters() {
        let mut ui = MockUI::new();
        ui.show_check(StatusKind::Success, "a", None);
        ui.show_check(StatusKind::Failed, "b", None);
        ui.show_check(StatusKind::Warning, "c", None);
        ui.show_check(StatusKind::Failed, "d", None);

        assert_eq!(ui.checks_with_status(StatusKind::Failed), vec!["b", "d"]);
        assert_eq!(ui.checks_with_status(StatusKind::Warning), vec!["c"]);
    }

    #[test]
    fn with_mode_sets_output_mode() {
        let ui = MockUI::with_mode(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
