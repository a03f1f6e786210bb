//! Integration tests for the CLI surface.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Lay down the full expected project tree (filesystem checks only; the
/// interpreter and import checks depend on the host and are not asserted on).
fn setup_project_tree(root: &Path) {
    let app = root.join("demo_reflex");
    fs::create_dir_all(&app).unwrap();
    for name in [
        "__init__.py",
        "demo_reflex.py",
        "state.py",
        "pages.py",
        "components.py",
        "capa_service.py",
    ] {
        fs::write(app.join(name), "").unwrap();
    }

    let docs = root.join("docs");
    fs::create_dir_all(&docs).unwrap();
    for name in [
        "README.md",
        "QUICKSTART.md",
        "USER_GUIDE.md",
        "ARCHITECTURE.md",
        "TROUBLESHOOTING.md",
        "CHANGELOG.md",
    ] {
        fs::write(docs.join(name), "").unwrap();
    }

    for name in ["rxconfig.py", "requirements.txt", ".gitignore"] {
        fs::write(root.join(name), "").unwrap();
    }
    let script = root.join("run_demo.sh");
    fs::write(&script, "#!/bin/sh\n").unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    }
}

fn doctor() -> Command {
    let mut cmd = Command::new(cargo_bin("capa-doctor"));
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = doctor();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Preflight verifier"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = doctor();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_args_runs_verify() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = doctor();
    cmd.current_dir(temp.path());
    // Empty directory: filesystem checks fail, so exit code is 1 and the
    // report header is still rendered.
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("CAPA Demo Verification"));
    Ok(())
}

#[test]
fn cli_missing_doc_file_fails_that_check_only() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    setup_project_tree(temp.path());
    fs::remove_file(temp.path().join("docs/USER_GUIDE.md"))?;

    let mut cmd = doctor();
    cmd.current_dir(temp.path());
    cmd.arg("verify");
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("✗ USER_GUIDE.md"))
        .stdout(predicate::str::contains("✓ README.md"))
        .stdout(predicate::str::contains("✓ TROUBLESHOOTING.md"));
    Ok(())
}

#[test]
fn cli_missing_venv_shows_warning_line() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let project = temp.path().join("demo");
    fs::create_dir_all(&project)?;
    setup_project_tree(&project);

    let mut cmd = doctor();
    cmd.current_dir(&project);
    cmd.arg("verify");
    // Exit code depends on the host's Python environment; the venv line
    // itself must render as a warning, never as a failure.
    let output = cmd.output()?;
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("⚠ ../venv virtual environment"));
    assert!(!stdout.contains("✗ ../venv virtual environment"));
    Ok(())
}

#[test]
fn cli_present_venv_passes_that_check() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let project = temp.path().join("demo");
    fs::create_dir_all(&project)?;
    fs::create_dir_all(temp.path().join("venv"))?;
    setup_project_tree(&project);

    let mut cmd = doctor();
    cmd.current_dir(&project);
    cmd.arg("verify");
    let output = cmd.output()?;
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("✓ ../venv virtual environment"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_non_executable_script_fails_permission_check_only(
) -> Result<(), Box<dyn std::error::Error>> {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new()?;
    setup_project_tree(temp.path());
    let script = temp.path().join("run_demo.sh");
    fs::set_permissions(&script, fs::Permissions::from_mode(0o644))?;

    let mut cmd = doctor();
    cmd.current_dir(temp.path());
    cmd.arg("verify");
    cmd.assert()
        .failure()
        .code(1)
        // The file-exists check in the configuration section still passes
        .stdout(predicate::str::contains("✓ run_demo.sh"))
        // The permission check fails with a chmod remediation
        .stdout(predicate::str::contains("✗ run_demo.sh is executable"))
        .stdout(predicate::str::contains("chmod +x"));
    Ok(())
}

#[test]
fn cli_json_report_parses_and_tallies() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = doctor();
    cmd.current_dir(temp.path());
    cmd.args(["verify", "--json"]);

    let output = cmd.output()?;
    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let total = json["results"].as_array().unwrap().len();
    let tallied = json["passed"].as_u64().unwrap()
        + json["failed"].as_u64().unwrap()
        + json["warned"].as_u64().unwrap();
    assert_eq!(tallied as usize, total);
    // Empty directory guarantees hard failures
    assert!(json["failed"].as_u64().unwrap() > 0);
    assert_eq!(output.status.code(), Some(1));
    Ok(())
}

#[test]
fn cli_checks_lists_checklist_without_evaluating() -> Result<(), Box<dyn std::error::Error>> {
    // Run from an empty directory: listing must still succeed
    let temp = TempDir::new()?;
    let mut cmd = doctor();
    cmd.current_dir(temp.path());
    cmd.arg("checks");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Built-in checklist"))
        .stdout(predicate::str::contains("venv.sibling"))
        .stdout(predicate::str::contains("(warn-only)"))
        .stdout(predicate::str::contains("imports.capa"));
    Ok(())
}

#[test]
fn cli_checks_json_is_parseable() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = doctor();
    cmd.args(["checks", "--json"]);
    let output = cmd.output()?;
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert!(!json.as_array().unwrap().is_empty());
    Ok(())
}

#[test]
fn cli_project_flag_overrides_cwd() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    setup_project_tree(temp.path());
    fs::remove_file(temp.path().join("rxconfig.py"))?;

    let mut cmd = doctor();
    cmd.args(["verify", "--project"]);
    cmd.arg(temp.path());
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("✗ rxconfig.py"));
    Ok(())
}

#[test]
fn cli_completions_generates_script() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = doctor();
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("capa-doctor"));
    Ok(())
}

#[test]
fn cli_quiet_prints_only_summary_and_hints() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = doctor();
    cmd.current_dir(temp.path());
    cmd.args(["--quiet", "verify"]);
    let output = cmd.output()?;
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Summary:"));
    assert!(!stdout.contains("✗ rxconfig.py"));
    // No banner and no (empty) section headings above the summary
    assert!(!stdout.contains("CAPA Demo Verification"));
    assert!(!stdout.contains("Directory structure:"));
    assert!(!stdout.contains("Documentation:"));
    Ok(())
}

#[test]
fn cli_verbose_includes_check_ids() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = doctor();
    cmd.current_dir(temp.path());
    cmd.args(["--verbose", "verify"]);
    let output = cmd.output()?;
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("[config.rxconfig]"));
    assert!(stdout.contains("[docs.readme]"));
    Ok(())
}
