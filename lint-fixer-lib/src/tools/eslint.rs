//! This module holds functionality specific to running ESLint and parsing its output.

use std::path::{Path, PathBuf};
use std::process::Command;

// non-std crates
use serde::Deserialize;

// project-specific modules/crates
use super::{get_tool_exe, get_tool_version, log_command, Diagnostic, LintEngine, LintOutcome};
use crate::error::{LintFixerError, Result};

/// ESLint 9 is the first release that reads `eslint.config.js` without opting in.
const FLAT_CONFIG_MAJOR: u64 = 9;

/// One entry of the array printed by `eslint --format json`.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EslintFileResult {
    /// The absolute path of the linted file.
    pub file_path: String,

    /// The problems that remain (after fixing, when a fix was requested).
    #[serde(default)]
    pub messages: Vec<Diagnostic>,

    /// The fixed source; only present when fixes were applied.
    pub output: Option<String>,
}

/// Parses the stdout of `eslint --format json`.
///
/// ESLint prints one entry per linted file. The entries are merged into a single
/// [`LintOutcome`]; the last `output` wins, though a single-file run only ever has one.
pub fn parse_eslint_output(stdout: &str) -> Result<LintOutcome> {
    let results: Vec<EslintFileResult> = serde_json::from_str(stdout.trim())?;
    let mut outcome = LintOutcome::default();
    for result in results {
        if result.output.is_some() {
            outcome.output = result.output;
        }
        outcome.messages.extend(result.messages);
    }
    Ok(outcome)
}

/// Runs the `eslint` executable as a child process.
pub struct Eslint {
    exe: PathBuf,
    base_dir: PathBuf,
}

impl Eslint {
    /// Locates the `eslint` executable (see [`get_tool_exe()`]) and logs its version.
    pub fn new(tool_dir: Option<&Path>, base_dir: &Path) -> Result<Self> {
        let exe = get_tool_exe("eslint", tool_dir, base_dir)?;
        if let Some(version) = get_tool_version(&exe) {
            if version.major < FLAT_CONFIG_MAJOR {
                log::warn!(
                    "ESLint {version} may not read eslint.config.js; version {FLAT_CONFIG_MAJOR} or newer is recommended"
                );
            }
        }
        Ok(Eslint {
            exe,
            base_dir: base_dir.to_path_buf(),
        })
    }
}

impl LintEngine for Eslint {
    fn lint(&self, file: &Path, fix: bool) -> Result<LintOutcome> {
        let mut cmd = Command::new(&self.exe);
        cmd.current_dir(&self.base_dir).args(["--format", "json"]);
        if fix {
            // fixes are reported in the JSON output and written back by the caller
            cmd.arg("--fix-dry-run");
        }
        cmd.arg(file);
        log_command(&cmd);
        let output = cmd.output()?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        log::debug!("Output from eslint:\n{stdout}");
        // 0 = no problems, 1 = problems found; anything else is a crash
        match output.status.code() {
            Some(0) | Some(1) => parse_eslint_output(&stdout),
            _ => Err(LintFixerError::Tool {
                tool: "eslint".to_string(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }),
        }
    }
}
