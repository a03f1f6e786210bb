//! Error types for capa-doctor operations.
//!
//! This module defines [`DoctorError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `DoctorError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `DoctorError::Other`) for unexpected errors
//! - Check-level errors never escape the checklist runner: the runner converts
//!   each into a failed result with a remediation hint

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for capa-doctor operations.
#[derive(Debug, Error)]
pub enum DoctorError {
    /// Expected file or directory is absent.
    #[error("Missing path: {path}")]
    MissingPath { path: PathBuf },

    /// Expected executable lacks the executable permission bit.
    #[error("Not executable: {path}")]
    NotExecutable { path: PathBuf },

    /// Named tool does not resolve on the search path.
    #[error("Tool not found on PATH: {tool}")]
    ToolNotFound { tool: String },

    /// External module failed to load in the probe interpreter.
    #[error("Module '{module}' failed to import: {message}")]
    ModuleImport { module: String, message: String },

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for capa-doctor operations.
pub type Result<T> = std::result::Result<T, DoctorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_displays_path() {
        let err = DoctorError::MissingPath {
            path: PathBuf::from("/demo/rxconfig.py"),
        };
        assert!(err.to_string().contains("/demo/rxconfig.py"));
    }

    #[test]
    fn not_executable_displays_path() {
        let err = DoctorError::NotExecutable {
            path: PathBuf::from("/demo/run_demo.sh"),
        };
        assert!(err.to_string().contains("run_demo.sh"));
    }

    #[test]
    fn tool_not_found_displays_tool() {
        let err = DoctorError::ToolNotFound {
            tool: "python3".into(),
        };
        assert!(err.to_string().contains("python3"));
    }

    #[test]
    fn module_import_displays_module_and_message() {
        let err = DoctorError::ModuleImport {
            module: "reflex".into(),
            message: "No module named 'reflex'".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("reflex"));
        assert!(msg.contains("No module named"));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(DoctorError::ToolNotFound {
                tool: "python3".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
