//! Help-text extraction.
//!
//! Runs one discovered script with `-h`, captures stdout, and cleans the
//! captured text for embedding in a static page. Invocation is
//! synchronous with no timeout: a hung script hangs the build, which is
//! acceptable for a human-supervised build step.
//!
//! A non-zero exit status is informational only. Plenty of help
//! implementations `exit 1` after printing usage, and the usage text is
//! exactly what we are after. Only a launch failure or death by signal
//! aborts the run.

use std::process::{Command, ExitStatus};

use crate::{ansi::strip_ansi, config::Config, discover::ScriptDescriptor, Error, Result};

/// Flag passed to every script to request its help text.
pub const HELP_FLAG: &str = "-h";

/// Captured and cleaned help output for one script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpText {
    /// Identifier of the script that produced this text.
    pub script: String,
    /// Stdout exactly as captured (lossily decoded as UTF-8).
    pub raw: String,
    /// Raw text after launcher-name substitution and ANSI stripping.
    pub cleaned: String,
}

/// Invoke `script` with [`HELP_FLAG`] and capture its cleaned help text.
///
/// # Errors
///
/// Returns `ScriptExecutionFailed` when the process cannot be started
/// (not executable, missing interpreter) or is terminated by a signal.
pub fn extract_help(script: &ScriptDescriptor, config: &Config) -> Result<HelpText> {
    tracing::debug!(script = %script.name, path = %script.path.display(), "invoking script");

    let output = Command::new(&script.path)
        .arg(HELP_FLAG)
        .output()
        .map_err(|e| Error::script_execution_failed(&script.name, e.to_string()))?;

    if output.status.code().is_none() {
        return Err(Error::script_execution_failed(
            &script.name,
            describe_abnormal_exit(output.status),
        ));
    }

    if !output.status.success() {
        // Common for `-h` handlers; the captured text is still valid.
        tracing::debug!(
            script = %script.name,
            status = ?output.status.code(),
            "help invocation exited non-zero"
        );
    }

    let raw = String::from_utf8_lossy(&output.stdout).into_owned();
    let cleaned = normalize(&raw, &config.launcher_name, &config.command_name);

    Ok(HelpText {
        script: script.name.clone(),
        raw,
        cleaned,
    })
}

/// Clean captured help text: substitute the launcher's self-reference
/// with the published command name, then strip ANSI escapes.
///
/// Substitution runs first so a launcher name split by styling escapes
/// is at least handled the same way the original build handled it.
#[must_use]
pub fn normalize(raw: &str, launcher_name: &str, command_name: &str) -> String {
    strip_ansi(&raw.replace(launcher_name, command_name))
}

#[cfg(unix)]
fn describe_abnormal_exit(status: ExitStatus) -> String {
    use std::os::unix::process::ExitStatusExt;

    status.signal().map_or_else(
        || "terminated abnormally".to_string(),
        |sig| format!("terminated by signal {sig}"),
    )
}

#[cfg(not(unix))]
fn describe_abnormal_exit(_status: ExitStatus) -> String {
    "terminated abnormally".to_string()
}
