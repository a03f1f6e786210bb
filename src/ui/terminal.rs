//! Terminal output implementation.

use console::Term;
use std::io::Write;

use super::{should_use_colors, DoctorTheme, OutputMode, StatusKind, UserInterface};

/// Terminal UI implementation writing through `console::Term`.
pub struct TerminalUI {
    term: Term,
    theme: DoctorTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            DoctorTheme::new()
        } else {
            DoctorTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
    }

    fn show_check(&mut self, status: StatusKind, label: &str, detail: Option<&str>) {
        if !self.mode.shows_sections() {
            return;
        }
        let line = match detail {
            Some(detail) => format!(
                "  {} {}",
                status.format(&self.theme, label),
                self.theme.dim.apply_to(format!("({})", detail))
            ),
            None => format!("  {}", status.format(&self.theme, label)),
        };
        writeln!(self.term, "{}", line).ok();
    }
}
