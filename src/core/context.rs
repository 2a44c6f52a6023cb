use std::path::{Path, PathBuf};

use anyhow::Result;

use super::{
    catalog::CatalogStore,
    consolidate::ConsolidationRule,
    rule_table::builtin_rules,
    scanner::{ScanOptions, SourceFile, scan},
};
use crate::{
    config::{Config, load_config},
    error::CatalogResult,
};

/// Resolved configuration for one invocation.
///
/// Relative paths in the config resolve against `root_dir`: the directory
/// holding the config file, or the starting directory when none was found.
pub struct Workspace {
    pub config: Config,
    pub root_dir: PathBuf,
    /// True if the config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

impl Workspace {
    pub fn load(start_dir: &Path) -> Result<Self> {
        let loaded = load_config(start_dir)?;
        Ok(Self {
            config: loaded.config,
            root_dir: loaded.root_dir,
            from_file: loaded.from_file,
        })
    }

    pub fn from_config(config: Config, root_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            root_dir: root_dir.into(),
            from_file: false,
        }
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.root_dir.join(&self.config.catalog_path)
    }

    pub fn source_root(&self) -> PathBuf {
        self.root_dir.join(&self.config.source_root)
    }

    pub fn catalog_store(&self) -> CatalogStore {
        CatalogStore::new(self.catalog_path())
            .with_indent(&self.config.indent)
            .with_metadata_key(&self.config.metadata_key)
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions::new(&self.config.extensions, &self.config.excluded_dirs)
            .with_ignores(&self.config.ignores)
    }

    pub fn scan_sources(&self) -> CatalogResult<Vec<SourceFile>> {
        scan(&self.source_root(), &self.scan_options())
    }

    /// The configured rule table, or the built-in one.
    pub fn consolidation_rules(&self) -> Vec<ConsolidationRule> {
        self.config
            .consolidations
            .clone()
            .unwrap_or_else(builtin_rules)
    }
}
