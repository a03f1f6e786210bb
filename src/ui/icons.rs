//! Unified status vocabulary for consistent CLI output.
//!
//! `StatusKind` provides a single canonical set of status icons and colors
//! used across all commands and display contexts.

use super::theme::DoctorTheme;
use crate::checks::CheckStatus;

/// Canonical status kinds used across all capa-doctor output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed.
    Success,
    /// Check failed.
    Failed,
    /// Non-fatal warning.
    Warning,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Warning => "⚠",
        }
    }

    /// Bracketed text for non-TTY output.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Success => "[ok]",
            Self::Failed => "[FAIL]",
            Self::Warning => "[warn]",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &DoctorTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &DoctorTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }
}

impl From<CheckStatus> for StatusKind {
    fn from(status: CheckStatus) -> Self {
        match status {
            CheckStatus::Pass => Self::Success,
            CheckStatus::Fail => Self::Failed,
            CheckStatus::Warn => Self::Warning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_returns_unicode_symbols() {
        assert_eq!(StatusKind::Success.icon(), "✓");
        assert_eq!(StatusKind::Failed.icon(), "✗");
        assert_eq!(StatusKind::Warning.icon(), "⚠");
    }

    #[test]
    fn bracketed_returns_text_labels() {
        assert_eq!(StatusKind::Success.bracketed(), "[ok]");
        assert_eq!(StatusKind::Failed.bracketed(), "[FAIL]");
        assert_eq!(StatusKind::Warning.bracketed(), "[warn]");
    }

    #[test]
    fn format_includes_icon_and_message() {
        let theme = DoctorTheme::plain();
        let result = StatusKind::Success.format(&theme, "rxconfig.py");
        assert!(result.contains("✓"));
        assert!(result.contains("rxconfig.py"));
    }

    #[test]
    fn from_check_status() {
        assert_eq!(StatusKind::from(CheckStatus::Pass), StatusKind::Success);
        assert_eq!(StatusKind::from(CheckStatus::Fail), StatusKind::Failed);
        assert_eq!(StatusKind::from(CheckStatus::Warn), StatusKind::Warning);
    }

    #[test]
    fn all_variants_have_unique_icons() {
        let icons = [
            StatusKind::Success.icon(),
            StatusKind::Failed.icon(),
            StatusKind::Warning.icon(),
        ];
        let mut unique = icons.to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), icons.len());
    }
}
