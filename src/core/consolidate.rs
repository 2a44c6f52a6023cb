//! Consolidation engine.
//!
//! Merges several old keys that carry the same text into one canonical new
//! key: every call site of an old key is rewritten to the new key, the new
//! entry is created if needed, and the old entries are dropped.
//!
//! Each step is idempotent. A re-run skips old keys that are already gone and
//! never overwrites a new key that already exists, so an interrupted run
//! (some files rewritten, catalog not yet saved) is recovered by running again.

use std::{
    collections::{HashMap, HashSet},
    path::PathBuf,
};

use serde::{Deserialize, Serialize};

use super::{
    catalog::{Catalog, CatalogStore, SaveOrder},
    scanner::SourceFile,
    usage::{Accessor, count_occurrences},
};
use crate::{
    error::{CatalogError, CatalogResult},
    utils::is_well_formed_key,
};

/// `old_keys` are superseded by `new_key` / `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidationRule {
    pub new_key: String,
    pub value: String,
    pub old_keys: Vec<String>,
}

impl ConsolidationRule {
    pub fn new(new_key: &str, value: &str, old_keys: &[&str]) -> Self {
        Self {
            new_key: new_key.to_string(),
            value: value.to_string(),
            old_keys: old_keys.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Reject rule tables that cannot be applied safely.
///
/// A rule listing its own new key among its old keys would rewrite call
/// sites onto the key and then delete it, so it is refused outright.
pub fn validate_rules(rules: &[ConsolidationRule]) -> CatalogResult<()> {
    for rule in rules {
        if !is_well_formed_key(&rule.new_key) {
            return Err(CatalogError::InvalidRule {
                reason: format!("new key \"{}\" is not a well-formed key", rule.new_key),
            });
        }
        if rule.old_keys.is_empty() {
            return Err(CatalogError::InvalidRule {
                reason: format!("rule for \"{}\" lists no old keys", rule.new_key),
            });
        }
        if rule.old_keys.iter().any(|k| k.is_empty()) {
            return Err(CatalogError::InvalidRule {
                reason: format!("rule for \"{}\" lists an empty old key", rule.new_key),
            });
        }
        if rule.old_keys.contains(&rule.new_key) {
            return Err(CatalogError::InvalidRule {
                reason: format!(
                    "rule for \"{}\" lists its own new key among its old keys",
                    rule.new_key
                ),
            });
        }
    }
    Ok(())
}

/// Interactions between rules of one table.
///
/// Rules apply in table order and later rules see the effects of earlier
/// ones. That is well defined but not necessarily what the author meant, so
/// overlaps are surfaced before a run instead of being resolved silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOverlap {
    /// An old key is superseded by more than one rule; the first rule wins.
    SharedOldKey { key: String, new_keys: Vec<String> },
    /// A rule's new key is another rule's old key and will be deleted at the end.
    NewKeyIsOldKey { key: String, superseded_by: String },
}

pub fn find_overlaps(rules: &[ConsolidationRule]) -> Vec<RuleOverlap> {
    let mut superseding: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for rule in rules {
        for old in &rule.old_keys {
            let entry = superseding.entry(old.as_str()).or_default();
            if entry.is_empty() {
                order.push(old);
            }
            entry.push(&rule.new_key);
        }
    }

    let mut overlaps: Vec<RuleOverlap> = order
        .iter()
        .filter_map(|key| {
            let new_keys = &superseding[key];
            (new_keys.len() > 1).then(|| RuleOverlap::SharedOldKey {
                key: key.to_string(),
                new_keys: new_keys.iter().map(|k| k.to_string()).collect(),
            })
        })
        .collect();

    for rule in rules {
        if let Some(new_keys) = superseding.get(rule.new_key.as_str()) {
            overlaps.push(RuleOverlap::NewKeyIsOldKey {
                key: rule.new_key.clone(),
                superseded_by: new_keys[0].to_string(),
            });
        }
    }

    overlaps
}

/// Something the engine did or skipped, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsolidationEvent {
    KeyAdded {
        key: String,
        value: String,
    },
    /// Advisory: the new key was left untouched.
    NewKeyAlreadyExists {
        key: String,
        existing: Option<String>,
        intended: String,
    },
    Rewrote {
        file: PathBuf,
        old_key: String,
        new_key: String,
        occurrences: usize,
    },
    /// Advisory: consolidated by an earlier run.
    KeyAlreadyAbsent { key: String, new_key: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsolidationReport {
    pub events: Vec<ConsolidationEvent>,
    pub replacements: usize,
    pub deleted_keys: Vec<String>,
    pub files_modified: usize,
    pub keys_remaining: usize,
    pub dry_run: bool,
}

impl ConsolidationReport {
    pub fn added_keys(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|e| match e {
            ConsolidationEvent::KeyAdded { key, .. } => Some(key.as_str()),
            _ => None,
        })
    }
}

/// Apply `rules` in order to the catalog and the cached source files.
///
/// Outside dry-run mode each rewritten file is written back immediately, and
/// the catalog is saved (sorted) once all rules are processed. In dry-run
/// mode the same in-memory changes are made and reported, but nothing is
/// written, so the report is identical to that of a real run.
pub fn consolidate(
    catalog: &mut Catalog,
    store: &CatalogStore,
    files: &mut [SourceFile],
    rules: &[ConsolidationRule],
    accessor: &Accessor,
    dry_run: bool,
) -> CatalogResult<ConsolidationReport> {
    validate_rules(rules)?;

    let mut report = ConsolidationReport {
        dry_run,
        ..Default::default()
    };
    let mut marked: Vec<String> = Vec::new();
    let mut modified: HashSet<PathBuf> = HashSet::new();

    for rule in rules {
        if catalog.insert_if_absent(&rule.new_key, &rule.value) {
            report.events.push(ConsolidationEvent::KeyAdded {
                key: rule.new_key.clone(),
                value: rule.value.clone(),
            });
        } else {
            report.events.push(ConsolidationEvent::NewKeyAlreadyExists {
                key: rule.new_key.clone(),
                existing: catalog.get(&rule.new_key).map(str::to_string),
                intended: rule.value.clone(),
            });
        }

        let new_pattern = accessor.pattern(&rule.new_key);

        for old_key in &rule.old_keys {
            if !catalog.contains_key(old_key) {
                report.events.push(ConsolidationEvent::KeyAlreadyAbsent {
                    key: old_key.clone(),
                    new_key: rule.new_key.clone(),
                });
                continue;
            }

            let old_pattern = accessor.pattern(old_key);

            for file in files.iter_mut() {
                let occurrences = count_occurrences(&file.content, &old_pattern);
                if occurrences == 0 {
                    continue;
                }

                file.content = file.content.replace(&old_pattern, &new_pattern);
                report.replacements += occurrences;
                report.events.push(ConsolidationEvent::Rewrote {
                    file: file.relative_path.clone(),
                    old_key: old_key.clone(),
                    new_key: rule.new_key.clone(),
                    occurrences,
                });
                modified.insert(file.path.clone());

                if !dry_run {
                    file.persist()?;
                }
            }

            // Stale even with zero call sites left
            if !marked.contains(old_key) {
                marked.push(old_key.clone());
            }
        }
    }

    for key in &marked {
        catalog.remove(key);
    }

    if !dry_run {
        store.save(catalog, SaveOrder::Sorted)?;
    }

    report.deleted_keys = marked;
    report.files_modified = modified.len();
    report.keys_remaining = catalog.len();
    Ok(report)
}
