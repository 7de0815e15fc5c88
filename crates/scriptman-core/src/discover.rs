//! Script discovery.
//!
//! Scans a single directory (non-recursive) for entries whose file name
//! ends with the configured extension and derives a script identifier
//! from each by stripping that extension. Order follows the directory
//! listing; no sorting is applied, so the mapping built downstream
//! reflects whatever order the host filesystem reports.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{Error, Result};

/// One discovered script file.
///
/// Descriptors only live for the duration of a scan; the mapping built
/// later keys on `name` alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptDescriptor {
    /// File name with the extension stripped; the identifier users see.
    pub name: String,
    /// Absolute path to the script file.
    pub path: PathBuf,
    /// Extension the file matched, including the leading dot.
    pub extension: String,
}

/// Scan `dir` for files ending with `extension`.
///
/// Matching is on the file name suffix only; no executability or file
/// type check happens here. A directory oddly named `backup.sh` would be
/// discovered and then fail at extraction time, which is the fail-fast
/// behavior we want for a build step.
///
/// # Errors
///
/// - `DirectoryNotFound` when `dir` does not exist or is not a directory
/// - `PermissionDenied` when the directory cannot be read
pub fn discover_scripts(dir: &Path, extension: &str) -> Result<Vec<ScriptDescriptor>> {
    let abs_dir = fs::canonicalize(dir).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::DirectoryNotFound {
            path: dir.to_path_buf(),
        },
        ErrorKind::PermissionDenied => Error::PermissionDenied {
            path: dir.to_path_buf(),
        },
        _ => Error::io(dir, &e),
    })?;

    if !abs_dir.is_dir() {
        return Err(Error::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = fs::read_dir(&abs_dir).map_err(|e| match e.kind() {
        ErrorKind::PermissionDenied => Error::PermissionDenied {
            path: dir.to_path_buf(),
        },
        _ => Error::io(dir, &e),
    })?;

    let mut scripts = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, &e))?;
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            // Non-UTF-8 names cannot become identifiers; skip them.
            tracing::debug!(?entry, "skipping non-UTF-8 directory entry");
            continue;
        };
        if let Some(stripped) = file_name.strip_suffix(extension) {
            // A file named exactly like the extension keeps its full
            // name as the identifier; stripping would leave nothing to
            // key on.
            let name = if stripped.is_empty() { file_name } else { stripped };
            scripts.push(ScriptDescriptor {
                name: name.to_string(),
                path: abs_dir.join(file_name),
                extension: extension.to_string(),
            });
        }
    }

    tracing::debug!(
        dir = %abs_dir.display(),
        count = scripts.len(),
        "discovered scripts"
    );
    Ok(scripts)
}
