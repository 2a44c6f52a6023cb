//! Catalog store: the flat key → value translation document.
//!
//! The catalog is read whole at the start of an invocation, mutated in memory,
//! and written back whole at the end. Serialization is deterministic: the same
//! mapping always produces the same bytes.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::{Map, Serializer, Value, ser::PrettyFormatter};

use crate::{
    error::{CatalogError, CatalogResult},
    utils::write_atomic,
};

/// Key order used when persisting the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOrder {
    /// Keep the existing key order (surgical edits such as deletion).
    Preserve,
    /// Sort keys lexicographically (restructuring such as consolidation).
    Sorted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: Map<String, Value>,
    metadata_key: String,
}

impl Catalog {
    /// Parse a catalog document. `path` is only used for error messages.
    pub fn parse(content: &str, path: &Path, metadata_key: &str) -> CatalogResult<Self> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| CatalogError::CatalogParse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        match value {
            Value::Object(entries) => Ok(Self {
                entries,
                metadata_key: metadata_key.to_string(),
            }),
            other => Err(CatalogError::CatalogParse {
                path: path.to_path_buf(),
                reason: format!("top level must be an object, found {}", json_kind(&other)),
            }),
        }
    }

    /// Serialize with the given indent unit and a trailing newline.
    pub fn to_document(&self, indent: &str, order: SaveOrder) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);

        match order {
            SaveOrder::Preserve => self.entries.serialize(&mut serializer)?,
            SaveOrder::Sorted => {
                let mut sorted = self.entries.clone();
                sorted.sort_keys();
                sorted.serialize(&mut serializer)?;
            }
        }

        // serde_json only emits valid UTF-8
        let mut document = String::from_utf8_lossy(&buf).into_owned();
        document.push('\n');
        Ok(document)
    }

    pub fn metadata_key(&self) -> &str {
        &self.metadata_key
    }

    /// Whether `key` is a translation entry. The metadata key never is.
    pub fn contains_key(&self, key: &str) -> bool {
        key != self.metadata_key && self.entries.contains_key(key)
    }

    /// String value of a translation entry.
    pub fn get(&self, key: &str) -> Option<&str> {
        if key == self.metadata_key {
            return None;
        }
        self.entries.get(key).and_then(Value::as_str)
    }

    /// Insert `key` only if absent. Returns true when the entry was added.
    pub fn insert_if_absent(&mut self, key: &str, value: &str) -> bool {
        if self.entries.contains_key(key) {
            return false;
        }
        self.entries
            .insert(key.to_string(), Value::String(value.to_string()));
        true
    }

    /// Remove a translation entry, keeping the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> bool {
        if key == self.metadata_key {
            return false;
        }
        self.entries.shift_remove(key).is_some()
    }

    /// Translation keys in document order (metadata key excluded).
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries
            .keys()
            .map(String::as_str)
            .filter(move |k| *k != self.metadata_key)
    }

    /// String-valued translation entries in document order.
    ///
    /// Non-string values and the metadata key are excluded from every
    /// semantic check, so they are skipped here.
    pub fn strings(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter(move |(k, _)| **k != self.metadata_key)
            .filter_map(|(k, v)| v.as_str().map(|s| (k.as_str(), s)))
    }

    /// Number of translation entries (metadata key excluded).
    pub fn len(&self) -> usize {
        self.keys().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[cfg(test)]
    pub(crate) fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let entries = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect();
        Self {
            entries,
            metadata_key: "$schema".to_string(),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Location and formatting of the persisted catalog.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
    indent: String,
    metadata_key: String,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            indent: "\t".to_string(),
            metadata_key: "$schema".to_string(),
        }
    }

    pub fn with_indent(mut self, indent: &str) -> Self {
        self.indent = indent.to_string();
        self
    }

    pub fn with_metadata_key(mut self, metadata_key: &str) -> Self {
        self.metadata_key = metadata_key.to_string();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name for report headers (e.g. `en.json`).
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn load(&self) -> CatalogResult<Catalog> {
        let content = fs::read_to_string(&self.path).map_err(|source| CatalogError::CatalogRead {
            path: self.path.clone(),
            source,
        })?;
        Catalog::parse(&content, &self.path, &self.metadata_key)
    }

    /// Persist the whole catalog atomically. The document is fully serialized
    /// before anything touches the disk.
    pub fn save(&self, catalog: &Catalog, order: SaveOrder) -> CatalogResult<()> {
        let document = catalog
            .to_document(&self.indent, order)
            .map_err(|e| CatalogError::CatalogWrite {
                path: self.path.clone(),
                source: io::Error::other(e),
            })?;

        write_atomic(&self.path, &document).map_err(|source| CatalogError::CatalogWrite {
            path: self.path.clone(),
            source,
        })
    }
}
