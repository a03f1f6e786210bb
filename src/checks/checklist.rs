//! Check descriptors and the built-in checklist.
//!
//! Every verification step is an immutable [`Check`] descriptor: what to look
//! at ([`CheckKind`]), how to group it in the report ([`Category`]), and
//! whether its failure blocks the run ([`Severity`]). The built-in checklist
//! for a CAPA demo working copy is assembled by [`builtin_checklist`];
//! evaluation is a small dispatch over the kind in the runner, so the list of
//! required artifacts stays declarative and independently testable.

use serde::Serialize;

/// Report section a check belongs to. Sections render in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    DirectoryStructure,
    SourceFiles,
    Documentation,
    Configuration,
    Permissions,
    Interpreter,
    VirtualEnv,
    ModuleImports,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Category; 8] = [
        Category::DirectoryStructure,
        Category::SourceFiles,
        Category::Documentation,
        Category::Configuration,
        Category::Permissions,
        Category::Interpreter,
        Category::VirtualEnv,
        Category::ModuleImports,
    ];

    /// Section title for the rendered report.
    pub fn title(self) -> &'static str {
        match self {
            Category::DirectoryStructure => "Directory structure",
            Category::SourceFiles => "Source files",
            Category::Documentation => "Documentation",
            Category::Configuration => "Configuration",
            Category::Permissions => "Permissions",
            Category::Interpreter => "Python interpreter",
            Category::VirtualEnv => "Virtual environment",
            Category::ModuleImports => "Module imports",
        }
    }
}

/// Whether a failing check blocks the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Failure increments the fail tally and forces a nonzero exit.
    Hard,
    /// Failure is reported as a warning and never affects exit status.
    Warn,
}

/// How to evaluate a check.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckKind {
    /// Pass iff the path exists and is a regular file.
    FileExists { path: String },

    /// Pass iff the path exists and is a directory.
    DirectoryExists { path: String },

    /// Pass iff the path exists and is executable by the current user.
    ExecutableBit { path: String },

    /// Pass iff the command resolves on the search path. On pass, the
    /// command's reported version is captured as the result detail.
    CommandAvailable {
        command: String,
        version_flag: String,
    },

    /// Pass iff `python3 -c "import <module>"` succeeds in a throwaway
    /// subprocess. `search_path` is a project-root-relative directory to
    /// inject into the interpreter's module search path before importing.
    ModuleImportable {
        module: String,
        search_path: Option<String>,
        install_hint: String,
    },
}

/// One verification step.
#[derive(Debug, Clone, Serialize)]
pub struct Check {
    /// Stable machine name (e.g., "source.state").
    pub id: String,
    /// Human-readable description shown in the report.
    pub label: String,
    /// Report section.
    pub category: Category,
    /// Hard-fail vs. soft-warn.
    pub severity: Severity,
    /// Evaluation descriptor.
    pub kind: CheckKind,
}

impl Check {
    fn file(id: &str, label: &str, category: Category, path: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            category,
            severity: Severity::Hard,
            kind: CheckKind::FileExists {
                path: path.to_string(),
            },
        }
    }

    fn dir(id: &str, label: &str, category: Category, path: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            category,
            severity: Severity::Hard,
            kind: CheckKind::DirectoryExists {
                path: path.to_string(),
            },
        }
    }
}

/// The fixed checklist for a CAPA demo working copy.
///
/// All checks are hard except the sibling virtual-environment directory,
/// which is warn-only: the bootstrap script creates it on first run, so its
/// absence is worth flagging but must not block verification. The executable
/// bit on `run_demo.sh` stays a hard check; that asymmetry is deliberate.
pub fn builtin_checklist() -> Vec<Check> {
    let mut checks = vec![
        Check::dir(
            "dirs.app",
            "demo_reflex/ application package",
            Category::DirectoryStructure,
            "demo_reflex",
        ),
        Check::dir(
            "dirs.docs",
            "docs/ documentation directory",
            Category::DirectoryStructure,
            "docs",
        ),
    ];

    for (id, label, path) in [
        ("source.init", "package marker", "demo_reflex/__init__.py"),
        (
            "source.app",
            "application entry",
            "demo_reflex/demo_reflex.py",
        ),
        ("source.state", "state module", "demo_reflex/state.py"),
        ("source.pages", "pages module", "demo_reflex/pages.py"),
        (
            "source.components",
            "components module",
            "demo_reflex/components.py",
        ),
        (
            "source.capa_service",
            "CAPA service integration",
            "demo_reflex/capa_service.py",
        ),
    ] {
        checks.push(Check::file(id, label, Category::SourceFiles, path));
    }

    for name in [
        "README.md",
        "QUICKSTART.md",
        "USER_GUIDE.md",
        "ARCHITECTURE.md",
        "TROUBLESHOOTING.md",
        "CHANGELOG.md",
    ] {
        let id = format!("docs.{}", name.trim_end_matches(".md").to_lowercase());
        checks.push(Check::file(
            &id,
            name,
            Category::Documentation,
            &format!("docs/{}", name),
        ));
    }

    for (id, path) in [
        ("config.rxconfig", "rxconfig.py"),
        ("config.requirements", "requirements.txt"),
        ("config.run_script", "run_demo.sh"),
        ("config.gitignore", ".gitignore"),
    ] {
        checks.push(Check::file(id, path, Category::Configuration, path));
    }

    checks.push(Check {
        id: "perms.run_script".to_string(),
        label: "run_demo.sh is executable".to_string(),
        category: Category::Permissions,
        severity: Severity::Hard,
        kind: CheckKind::ExecutableBit {
            path: "run_demo.sh".to_string(),
        },
    });

    checks.push(Check {
        id: "interpreter.python3".to_string(),
        label: "python3 on PATH".to_string(),
        category: Category::Interpreter,
        severity: Severity::Hard,
        kind: CheckKind::CommandAvailable {
            command: "python3".to_string(),
            version_flag: "--version".to_string(),
        },
    });

    checks.push(Check {
        id: "venv.sibling".to_string(),
        label: "../venv virtual environment".to_string(),
        category: Category::VirtualEnv,
        severity: Severity::Warn,
        kind: CheckKind::DirectoryExists {
            path: "../venv".to_string(),
        },
    });

    checks.push(Check {
        id: "imports.capa".to_string(),
        label: "CAPA SDK imports".to_string(),
        category: Category::ModuleImports,
        severity: Severity::Hard,
        kind: CheckKind::ModuleImportable {
            module: "capa".to_string(),
            search_path: Some("..".to_string()),
            install_hint: "Install the CAPA SDK in the parent checkout: pip install -e .."
                .to_string(),
        },
    });

    checks.push(Check {
        id: "imports.reflex".to_string(),
        label: "Reflex framework imports".to_string(),
        category: Category::ModuleImports,
        severity: Severity::Hard,
        kind: CheckKind::ModuleImportable {
            module: "reflex".to_string(),
            search_path: None,
            install_hint: "Install Reflex: pip install reflex (or pip install -r requirements.txt)"
                .to_string(),
        },
    });

    checks
}
