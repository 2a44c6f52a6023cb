use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{
    consolidate::{ConsolidationRule, validate_rules},
    policy::KeyPolicy,
    usage::Accessor,
};

pub const CONFIG_FILE_NAME: &str = ".msgtidyrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_accessor")]
    pub accessor: String,
    #[serde(default = "default_shared_prefix")]
    pub shared_prefix: String,
    #[serde(default = "default_dynamic_prefixes")]
    pub dynamic_prefixes: Vec<String>,
    #[serde(default)]
    pub allowed_duplicates: Vec<String>,
    #[serde(default = "default_metadata_key")]
    pub metadata_key: String,
    #[serde(default = "default_indent")]
    pub indent: String,
    /// Overrides the compiled-in consolidation table when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consolidations: Option<Vec<ConsolidationRule>>,
}

fn default_catalog_path() -> String {
    "messages/en.json".to_string()
}

fn default_source_root() -> String {
    "src".to_string()
}

fn default_extensions() -> Vec<String> {
    [".svelte", ".ts"].map(String::from).to_vec()
}

fn default_excluded_dirs() -> Vec<String> {
    ["node_modules", ".svelte-kit"].map(String::from).to_vec()
}

fn default_accessor() -> String {
    "m".to_string()
}

fn default_shared_prefix() -> String {
    "common_".to_string()
}

fn default_dynamic_prefixes() -> Vec<String> {
    vec!["errors_".to_string()]
}

fn default_metadata_key() -> String {
    "$schema".to_string()
}

fn default_indent() -> String {
    "\t".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            source_root: default_source_root(),
            extensions: default_extensions(),
            excluded_dirs: default_excluded_dirs(),
            ignores: Vec::new(),
            accessor: default_accessor(),
            shared_prefix: default_shared_prefix(),
            dynamic_prefixes: default_dynamic_prefixes(),
            allowed_duplicates: Vec::new(),
            metadata_key: default_metadata_key(),
            indent: default_indent(),
            consolidations: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns in `ignores`, an empty
    /// accessor or extension list, and a malformed consolidation table.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.accessor.trim().is_empty() {
            bail!("'accessor' must not be empty");
        }

        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file extension");
        }

        if let Some(rules) = &self.consolidations {
            validate_rules(rules).context("Invalid 'consolidations' table")?;
        }

        Ok(())
    }

    pub fn accessor(&self) -> Accessor {
        Accessor::new(&self.accessor)
    }

    pub fn key_policy(&self) -> KeyPolicy {
        KeyPolicy {
            shared_prefix: self.shared_prefix.clone(),
            dynamic_prefixes: self.dynamic_prefixes.clone(),
            allowed_duplicates: self.allowed_duplicates.iter().cloned().collect::<HashSet<_>>(),
            metadata_key: self.metadata_key.clone(),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory that relative config paths resolve against.
    pub root_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            let root_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                root_dir,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            root_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
