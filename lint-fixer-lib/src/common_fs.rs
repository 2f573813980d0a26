//! A module to hold all common file system functionality.

use std::fs;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

// project specific modules/crates
use crate::error::{LintFixerError, Result};

/// Expands the glob `pattern` into a sorted list of absolute file paths.
///
/// A relative `pattern` is resolved against `base_dir`, which should be absolute.
/// Directories matched by the pattern are skipped, as are entries that could not be
/// read.
///
/// Returns [`LintFixerError::NoFilesMatched`] if nothing is left.
pub fn resolve_files(pattern: &str, base_dir: &Path) -> Result<Vec<PathBuf>> {
    let abs_pattern = absolute_pattern(pattern, base_dir);
    log::debug!("Expanding glob {abs_pattern}");
    let mut files = Vec::new();
    for entry in glob::glob(&abs_pattern)? {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => log::debug!("Skipping unreadable glob entry: {e}"),
        }
    }
    if files.is_empty() {
        return Err(LintFixerError::NoFilesMatched(pattern.to_string()));
    }
    files.sort();
    files.dedup();
    Ok(files)
}

/// Anchors a relative glob `pattern` at `base_dir`.
///
/// The components that come from `base_dir` are escaped, so a working directory
/// named like `proj[1]` is matched literally. Absolute patterns are returned as given.
fn absolute_pattern(pattern: &str, base_dir: &Path) -> String {
    if Path::new(pattern).is_absolute() {
        return pattern.to_string();
    }
    let joined = normalize_path(&base_dir.join(pattern));
    let base = normalize_path(base_dir);
    // `..` in the pattern can climb out of base_dir; only the shared part is literal
    let literal = joined
        .components()
        .zip(base.components())
        .take_while(|(a, b)| a == b)
        .map(|(a, _)| a)
        .collect::<PathBuf>();
    let rest = joined.strip_prefix(&literal).unwrap_or(Path::new(""));
    let mut abs_pattern = glob::Pattern::escape(&literal.to_string_lossy());
    if !rest.as_os_str().is_empty() {
        if !abs_pattern.ends_with(MAIN_SEPARATOR) {
            abs_pattern.push(MAIN_SEPARATOR);
        }
        abs_pattern.push_str(&rest.to_string_lossy());
    }
    abs_pattern
}

/// Writes `updated` to `file_path` only if it differs from `original`.
///
/// Returns whether the file was written.
pub fn write_if_changed(file_path: &Path, original: &str, updated: &str) -> Result<bool> {
    if original == updated {
        return Ok(false);
    }
    fs::write(file_path, updated)?;
    Ok(true)
}

/// Shortens `file_path` to be relative to `base_dir` for display, if possible.
pub fn display_path(file_path: &Path, base_dir: &Path) -> String {
    file_path
        .strip_prefix(base_dir)
        .unwrap_or(file_path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// This was copied from [cargo source code](https://github.com/rust-lang/cargo/blob/fede83ccf973457de319ba6fa0e36ead454d2e20/src/cargo/util/paths.rs#L61).
///
/// NOTE: Rust [std::path] crate has no native functionality equivalent to this.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components = path.components().peekable();
    let mut ret = if let Some(c @ Component::Prefix(..)) = components.peek().cloned() {
        components.next();
        PathBuf::from(c.as_os_str())
    } else {
        PathBuf::new()
    };

    for component in components {
        match component {
            Component::Prefix(..) => unreachable!(),
            Component::RootDir => {
                ret.push(component.as_os_str());
            }
            Component::CurDir => {}
            Component::ParentDir => {
                ret.pop();
            }
            Component::Normal(c) => {
                ret.push(c);
            }
        }
    }
    ret
}
