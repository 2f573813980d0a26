//! This module holds functionality specific to running Prettier.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

// project-specific modules/crates
use super::{get_tool_exe, get_tool_version, log_command, FormatEngine};
use crate::error::{LintFixerError, Result};

/// Runs the `prettier` executable as a child process.
///
/// The content is piped through stdin with `--stdin-filepath`, so Prettier resolves
/// its configuration (and parser) as if it were formatting the file in place.
pub struct Prettier {
    exe: PathBuf,
    base_dir: PathBuf,
}

impl Prettier {
    /// Locates the `prettier` executable (see [`get_tool_exe()`]).
    pub fn new(tool_dir: Option<&Path>, base_dir: &Path) -> Result<Self> {
        let exe = get_tool_exe("prettier", tool_dir, base_dir)?;
        get_tool_version(&exe);
        Ok(Prettier {
            exe,
            base_dir: base_dir.to_path_buf(),
        })
    }
}

impl FormatEngine for Prettier {
    fn format(&self, file: &Path, content: &str) -> Result<String> {
        let mut cmd = Command::new(&self.exe);
        cmd.current_dir(&self.base_dir)
            .arg("--stdin-filepath")
            .arg(file)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        log_command(&cmd);
        let mut child = cmd.spawn()?;
        let stdin = child.stdin.take();
        // stdin is fed from its own thread while stdout is drained here, so a formatter
        // that streams its output cannot stall on a full pipe
        let output = thread::scope(|scope| {
            if let Some(mut stdin) = stdin {
                scope.spawn(move || {
                    // a broken pipe means prettier exited early; its status and stderr say why
                    if let Err(e) = stdin.write_all(content.as_bytes()) {
                        log::debug!("Could not write to prettier's stdin: {e}");
                    }
                    // dropping stdin closes the pipe so prettier sees EOF
                });
            }
            child.wait_with_output()
        })?;
        if !output.status.success() {
            return Err(LintFixerError::Tool {
                tool: "prettier".to_string(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        if !output.stderr.is_empty() {
            log::debug!(
                "prettier made the following summary:\n{}",
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8(output.stdout).map_err(|e| LintFixerError::Tool {
            tool: "prettier".to_string(),
            message: format!("output is not valid UTF-8: {e}"),
        })
    }
}
