//! Filesystem and subprocess probes behind the checklist.
//!
//! Tool resolution iterates explicit PATH entries instead of shelling out to
//! `which`, whose behavior varies across systems and which is sometimes a
//! shell builtin with inconsistent error handling. The module-import probe runs the
//! interpreter in a throwaway child process so a broken external dependency
//! cannot crash the verifier, and bounds the wait so it cannot hang it either.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use regex::Regex;

use crate::error::DoctorError;

/// Default bound on probe subprocesses. Local interpreter invocations finish
/// in tens of milliseconds; anything past this is treated as a failure.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Captured output of a bounded probe subprocess.
struct ProbeOutput {
    success: bool,
    stdout: String,
    stderr: String,
}

/// Drain a child pipe to a string on a background thread, so a probe that
/// writes more than the pipe buffer cannot block against an unread pipe.
fn drain_pipe<R: Read + Send + 'static>(pipe: Option<R>) -> std::thread::JoinHandle<String> {
    std::thread::spawn(move || {
        let mut buf = String::new();
        if let Some(mut pipe) = pipe {
            pipe.read_to_string(&mut buf).ok();
        }
        buf
    })
}

/// Run a probe command to completion or until the timeout expires.
///
/// Returns `Ok(None)` on timeout (the child is killed and reaped).
fn run_bounded(mut cmd: Command, timeout: Duration) -> std::io::Result<Option<ProbeOutput>> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    let mut child = cmd.spawn()?;
    let stdout = drain_pipe(child.stdout.take());
    let stderr = drain_pipe(child.stderr.take());
    let deadline = Instant::now() + timeout;

    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(ProbeOutput {
                success: status.success(),
                stdout: stdout.join().unwrap_or_default(),
                stderr: stderr.join().unwrap_or_default(),
            }));
        }
        if Instant::now() >= deadline {
            // Killing the child closes its pipes, which also ends the
            // drain threads.
            child.kill().ok();
            child.wait().ok();
            return Ok(None);
        }
        std::thread::sleep(Duration::from_millis(25));
    }
}

/// Run `<binary> <version_flag>` and extract the reported version string.
///
/// Returns `None` if the command fails, times out, or prints nothing that
/// looks like a version. Interpreters disagree on whether the version goes to
/// stdout or stderr, so both are inspected.
pub fn capture_version(binary: &Path, version_flag: &str, timeout: Duration) -> Option<String> {
    let mut cmd = Command::new(binary);
    cmd.arg(version_flag);
    let output = run_bounded(cmd, timeout).ok().flatten()?;
    if !output.success {
        return None;
    }

    let line = [output.stdout.as_str(), output.stderr.as_str()]
        .iter()
        .flat_map(|s| s.lines())
        .map(str::trim)
        .find(|l| !l.is_empty())?
        .to_string();

    let version_re = Regex::new(r"\d+\.\d+(?:\.\d+)*").ok()?;
    version_re.is_match(&line).then_some(line)
}

/// Attempt to import `module` in a throwaway interpreter subprocess.
///
/// `search_path` is prepended to the interpreter's module search path when
/// given; it is passed as an argv entry rather than interpolated into the
/// program text, so arbitrary directory names are safe. Timeout, spawn
/// failure, and nonzero exit all map to [`DoctorError::ModuleImport`].
pub fn import_module(
    interpreter: &Path,
    module: &str,
    search_path: Option<&Path>,
    timeout: Duration,
) -> Result<(), DoctorError> {
    let mut cmd = Command::new(interpreter);
    match search_path {
        Some(dir) => {
            cmd.arg("-c")
                .arg(format!(
                    "import sys; sys.path.insert(0, sys.argv[1]); import {}",
                    module
                ))
                .arg(dir);
        }
        None => {
            cmd.arg("-c").arg(format!("import {}", module));
        }
    }

    let outcome = run_bounded(cmd, timeout).map_err(|e| DoctorError::ModuleImport {
        module: module.to_string(),
        message: format!("failed to spawn interpreter: {}", e),
    })?;

    match outcome {
        None => Err(DoctorError::ModuleImport {
            module: module.to_string(),
            message: format!("import probe timed out after {}s", timeout.as_secs()),
        }),
        Some(output) if output.success => Ok(()),
        Some(output) => {
            // Last stderr line is the exception summary (e.g. ModuleNotFoundError).
            let message = output
                .stderr
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .next_back()
                .unwrap_or("import failed")
                .to_string();
            Err(DoctorError::ModuleImport {
                module: module.to_string(),
                message,
            })
        }
    }
}
