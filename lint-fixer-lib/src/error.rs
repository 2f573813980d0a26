//! The error type shared by all of this crate's fallible operations.

use std::path::PathBuf;

/// Everything that can go wrong while resolving, formatting, linting or notifying.
///
/// Only [`LintFixerError::NoFilesMatched`] and [`LintFixerError::InvalidPattern`] are
/// fatal for a run. The rest are logged where they are caught.
#[derive(Debug, thiserror::Error)]
pub enum LintFixerError {
    /// The file pattern resolved to an empty list.
    #[error("no files matched the pattern `{0}`")]
    NoFilesMatched(String),

    /// The file pattern could not be compiled into a glob.
    #[error("invalid file pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),

    /// Processing a single file failed; the run continues with the next file.
    #[error("failed to process {}: {source}", path.display())]
    FileProcessing {
        path: PathBuf,
        #[source]
        source: Box<LintFixerError>,
    },

    /// Reading or writing a file failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// An external tool could not be located.
    #[error("could not find `{0}` in the tool directory, node_modules/.bin, or $PATH")]
    ToolNotFound(String),

    /// An external tool ran but reported a failure.
    #[error("{tool} failed: {message}")]
    Tool { tool: String, message: String },

    /// An external tool's output could not be deserialized.
    #[error("could not parse tool output: {0}")]
    Parse(#[from] serde_json::Error),

    /// Audio playback could not be started.
    #[error("audio notification failed: {0}")]
    Notification(String),
}

impl LintFixerError {
    /// Wraps `self` as the cause of a failure to process the file at `path`.
    pub fn for_file(self, path: impl Into<PathBuf>) -> Self {
        LintFixerError::FileProcessing {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

/// A convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LintFixerError>;
