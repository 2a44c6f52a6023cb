use std::{
    collections::HashSet,
    fs, io,
    path::{Path, PathBuf},
};

use glob::Pattern;
use walkdir::WalkDir;

use crate::{
    error::{CatalogError, CatalogResult},
    utils::write_atomic,
};

/// A scanned source file with its content cached for the whole invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Path relative to the scan root, for reporting.
    pub relative_path: PathBuf,
    pub content: String,
}

impl SourceFile {
    /// Write the cached content back to disk.
    pub fn persist(&self) -> CatalogResult<()> {
        write_atomic(&self.path, &self.content).map_err(|source| CatalogError::SourceWrite {
            path: self.path.clone(),
            source,
        })
    }
}

/// Which files a scan picks up.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// File name suffixes to include (e.g. `.svelte`, `.ts`).
    pub extensions: Vec<String>,
    /// Directory names pruned without descending.
    pub excluded_dirs: HashSet<String>,
    /// Glob patterns matched against the path relative to the root.
    pub ignores: Vec<Pattern>,
}

impl ScanOptions {
    pub fn new(extensions: &[String], excluded_dirs: &[String]) -> Self {
        Self {
            extensions: extensions.to_vec(),
            excluded_dirs: excluded_dirs.iter().cloned().collect(),
            ignores: Vec::new(),
        }
    }

    /// Add ignore patterns. Invalid patterns are rejected by config validation
    /// before a scan starts, so they are skipped here.
    pub fn with_ignores(mut self, patterns: &[String]) -> Self {
        self.ignores = patterns
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect();
        self
    }

    fn is_scannable_file(&self, name: &str) -> bool {
        self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }

    fn is_ignored(&self, relative: &Path) -> bool {
        self.ignores.iter().any(|p| p.matches_path(relative))
    }
}

/// Recursively collect every matching file under `root` and read its content.
///
/// Any unreadable directory entry or file aborts the scan with
/// [`CatalogError::Scan`]. Results are sorted by path.
pub fn scan(root: &Path, options: &ScanOptions) -> CatalogResult<Vec<SourceFile>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        entry.depth() == 0
            || !entry.file_type().is_dir()
            || !options
                .excluded_dirs
                .contains(entry.file_name().to_string_lossy().as_ref())
    });

    for entry in walker {
        let entry = entry.map_err(|e| CatalogError::Scan {
            path: e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            source: io::Error::from(e),
        })?;

        if !entry.file_type().is_file()
            || !options.is_scannable_file(&entry.file_name().to_string_lossy())
        {
            continue;
        }

        let path = entry.path();
        let relative_path = path.strip_prefix(root).unwrap_or(path).to_path_buf();
        if options.is_ignored(&relative_path) {
            continue;
        }

        let content = fs::read_to_string(path).map_err(|source| CatalogError::Scan {
            path: path.to_path_buf(),
            source,
        })?;

        files.push(SourceFile {
            path: path.to_path_buf(),
            relative_path,
            content,
        });
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}
