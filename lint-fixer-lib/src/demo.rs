//! A canned JavaScript file with deliberate problems, for trying the tool out.

use std::fs;
use std::path::{Path, PathBuf};

// project-specific modules/crates
use crate::error::Result;

/// Code that both Prettier and ESLint have something to say about.
pub const TEST_FILE_CONTENT: &str = "
// Demonstrates which problems Prettier and ESLint fix automatically and which need a human

var noUsedVar = 'Hello';

function unusedFunction() {
  const unusedVariable = \"This is unused\";
}

noUsedVar = 'Updated value';
";

/// Writes [`TEST_FILE_CONTENT`] to `file` (relative to `base_dir`), creating parent
/// directories as needed. Any existing content is overwritten.
///
/// Returns the absolute path that was written.
pub fn prepare_test_file(file: &Path, base_dir: &Path) -> Result<PathBuf> {
    let resolved = base_dir.join(file);
    if let Some(parent) = resolved.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&resolved, TEST_FILE_CONTENT)?;
    log::info!("✅ Reset {}", resolved.to_string_lossy());
    Ok(resolved)
}
