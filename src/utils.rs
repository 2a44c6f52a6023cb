//! Common utility functions shared across the codebase.

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use tempfile::NamedTempFile;

/// Checks if a key matches the catalog naming grammar: one or more segments of
/// ASCII letters and digits joined by single underscores.
///
/// # Examples
///
/// ```
/// use msgtidy::utils::is_well_formed_key;
///
/// assert!(is_well_formed_key("groups_editGroup"));
/// assert!(is_well_formed_key("hosts_interfaces_ipAddress"));
/// assert!(is_well_formed_key("title"));
/// assert!(!is_well_formed_key(""));
/// assert!(!is_well_formed_key("groups__edit"));
/// assert!(!is_well_formed_key("_leading"));
/// assert!(!is_well_formed_key("has-dash"));
/// assert!(!is_well_formed_key("$schema"));
/// ```
pub fn is_well_formed_key(key: &str) -> bool {
    key.split('_')
        .all(|segment| !segment.is_empty() && segment.chars().all(|c| c.is_ascii_alphanumeric()))
}

/// Replaces `path` with `contents` in one step.
///
/// The whole document is written to a temporary file in the same directory
/// and then renamed over the target, so readers never observe a half-written file.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    // Temp files are created owner-only; keep the target's mode
    if let Ok(metadata) = fs::metadata(path) {
        temp.as_file().set_permissions(metadata.permissions())?;
    }
    temp.write_all(contents.as_bytes())?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
