//! This crate holds the functionality related to running the external formatter and
//! linter.
//!
//! Each tool sits behind a trait ([`FormatEngine`] and [`LintEngine`]) so that the
//! orchestration in [`crate::run`] does not care how a tool is invoked.

use std::path::{Path, PathBuf};
use std::process::Command;

// non-std crates
use semver::Version;
use serde::Deserialize;
use which::{which, which_in};

// project-specific modules/crates
use crate::error::{LintFixerError, Result};
pub mod eslint;
pub mod prettier;

/// A single problem reported by the linter.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// The rule that produced this diagnostic.
    ///
    /// This is `None` for parse errors.
    pub rule_id: Option<String>,

    /// `1` for warnings, `2` for errors.
    #[serde(default)]
    pub severity: u8,

    /// A human readable explanation.
    pub message: String,

    /// The 1-based line number, if known.
    pub line: Option<u32>,

    /// The 1-based column number, if known.
    pub column: Option<u32>,
}

impl Diagnostic {
    /// A one-line rendition in the form `- line:col message (rule)`.
    pub fn summary(&self) -> String {
        format!(
            "- {}:{} {} ({})",
            self.line.unwrap_or(0),
            self.column.unwrap_or(0),
            self.message,
            self.rule_id.as_deref().unwrap_or("parse-error"),
        )
    }

    /// Extra advice for a few common rules.
    pub fn hint(&self) -> Option<&'static str> {
        match self.rule_id.as_deref()? {
            "no-undef" => Some("check for a variable that is used but never defined"),
            "no-unused-vars" => Some("remove the unused variable"),
            "no-console" => Some("remove or replace the console call"),
            "no-var" => Some("declare with let or const instead of var"),
            "prefer-const" => Some("use const for a binding that is never reassigned"),
            _ => None,
        }
    }
}

/// What the linter had to say about a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintOutcome {
    /// The fixed source text, present only if auto-fix was requested and changed
    /// something.
    pub output: Option<String>,

    /// The problems remaining after any fixes.
    pub messages: Vec<Diagnostic>,
}

/// A tool that rewrites a file's content into its canonical form.
pub trait FormatEngine {
    /// Returns the formatted rendition of `content`, which was read from `file`.
    ///
    /// The `file` path is used by the tool to find its configuration and to pick a
    /// parser; the file itself is not modified.
    fn format(&self, file: &Path, content: &str) -> Result<String>;
}

/// A tool that reports (and optionally fixes) problems in a file.
pub trait LintEngine {
    /// Lints `file`.
    ///
    /// If `fix` is true, the returned [`LintOutcome::output`] holds the fixed source
    /// but the file itself is not modified.
    fn lint(&self, file: &Path, fix: bool) -> Result<LintOutcome>;
}

/// Fetch the path to a tool by `name` (ie `"eslint"` or `"prettier"`).
///
/// The tool is sought (in order of priority) in
///
/// 1. the given `tool_dir`, if any
/// 2. `base_dir`/node_modules/.bin
/// 3. the `$PATH` environment variable
///
/// The only reason this function would return an error is if the specified tool is not
/// installed in any of those places.
pub fn get_tool_exe(name: &str, tool_dir: Option<&Path>, base_dir: &Path) -> Result<PathBuf> {
    if let Some(dir) = tool_dir {
        if let Ok(exe_path) = which_in(name, Some(dir), base_dir) {
            return Ok(exe_path);
        }
        log::warn!(
            "{name} was not found in {}; falling back to node_modules and $PATH",
            dir.to_string_lossy()
        );
    }
    let local_bin = base_dir.join("node_modules").join(".bin");
    if let Ok(exe_path) = which_in(name, Some(&local_bin), base_dir) {
        return Ok(exe_path);
    }
    which(name).map_err(|_| LintFixerError::ToolNotFound(name.to_string()))
}

/// Runs `exe --version` and leniently parses the result.
pub fn get_tool_version(exe: &Path) -> Option<Version> {
    let output = Command::new(exe).arg("--version").output().ok()?;
    let raw = String::from_utf8_lossy(&output.stdout);
    let raw = raw.trim();
    log::debug!("{} --version\n{}", exe.to_string_lossy(), raw);
    lenient_semver::parse_into::<Version>(raw.trim_start_matches('v')).ok()
}

/// Logs the full command line of `cmd` at debug level.
pub(crate) fn log_command(cmd: &Command) {
    log::debug!(
        "Running \"{} {}\"",
        cmd.get_program().to_string_lossy(),
        cmd.get_args()
            .map(|x| x.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    );
}
