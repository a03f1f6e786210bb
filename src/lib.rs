//! capa-doctor - Preflight verifier for CAPA Reflex demo working copies.
//!
//! capa-doctor checks that a local checkout of the CAPA demo application is
//! correctly structured and that its runtime prerequisites are satisfiable,
//! without executing the application itself. It walks a fixed checklist of
//! filesystem paths and tool availability, classifies each check as
//! pass/fail/warn, and exits nonzero iff any hard check failed.
//!
//! # Modules
//!
//! - [`checks`] - Check descriptors, probes, the checklist runner, and reports
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Terminal output, theme, and status glyphs
//!
//! # Example
//!
//! ```
//! use capa_doctor::checks::{builtin_checklist, Verifier};
//!
//! let checklist = builtin_checklist();
//! let verifier = Verifier::new(std::path::Path::new("."));
//! let report = verifier.run(&checklist);
//! assert_eq!(
//!     report.passed() + report.failed() + report.warned(),
//!     checklist.len()
//! );
//! ```

pub mod checks;
pub mod cli;
pub mod error;
pub mod ui;

pub use error::{DoctorError, Result};
