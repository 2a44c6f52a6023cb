//! Safe deletion engine.
//!
//! Removes an arbitrary batch of keys from the catalog. The batch is refused
//! as a whole when it would remove more than half of the catalog, which
//! guards against piping a full catalog dump instead of an unused-key report.

use std::collections::HashSet;

use super::catalog::{Catalog, CatalogStore, SaveOrder};
use crate::error::{CatalogError, CatalogResult};

/// Largest share of the catalog one batch may delete, in percent.
pub const MAX_DELETE_PERCENTAGE: f64 = 50.0;

/// Report header words that never name a key.
const REPORT_HEADER_WORDS: &[&str] = &["Found", "Remove"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeletionReport {
    /// Distinct keys requested, in input order.
    pub requested: Vec<String>,
    /// Present keys, deleted (or that would be deleted in dry-run mode).
    pub deleted: Vec<String>,
    /// Advisory: requested keys absent from the catalog.
    pub not_found: Vec<String>,
    pub total_before: usize,
    pub remaining: usize,
    pub percentage: f64,
    pub dry_run: bool,
}

/// Delete `requested` keys from the catalog and persist it in its existing
/// key order.
///
/// Fails with [`CatalogError::SafetyThresholdExceeded`] before any mutation
/// when the present keys exceed [`MAX_DELETE_PERCENTAGE`] of the catalog.
/// Absent keys are reported, not treated as errors.
pub fn delete_keys<S: AsRef<str>>(
    catalog: &mut Catalog,
    store: &CatalogStore,
    requested: &[S],
    dry_run: bool,
) -> CatalogResult<DeletionReport> {
    let mut seen = HashSet::new();
    let requested: Vec<String> = requested
        .iter()
        .map(|k| k.as_ref().to_string())
        .filter(|k| seen.insert(k.clone()))
        .collect();

    let (present, not_found): (Vec<String>, Vec<String>) = requested
        .iter()
        .cloned()
        .partition(|k| catalog.contains_key(k));

    let total_before = catalog.len();
    let mut report = DeletionReport {
        requested,
        not_found,
        total_before,
        remaining: total_before,
        dry_run,
        ..Default::default()
    };

    if present.is_empty() {
        return Ok(report);
    }

    let percentage = present.len() as f64 * 100.0 / total_before as f64;
    if percentage > MAX_DELETE_PERCENTAGE {
        return Err(CatalogError::SafetyThresholdExceeded {
            percentage,
            present: present.len(),
            total: total_before,
        });
    }

    report.percentage = percentage;
    report.remaining = total_before - present.len();
    report.deleted = present;

    if dry_run {
        return Ok(report);
    }

    for key in &report.deleted {
        catalog.remove(key);
    }
    store.save(catalog, SaveOrder::Preserve)?;

    Ok(report)
}

/// Extract keys from newline-delimited input.
///
/// Accepts the unused-key report verbatim: lines are trimmed, a leading
/// `-` list marker is stripped, and blank lines, lines containing
/// whitespace, and report header lines are dropped.
pub fn parse_key_batch(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .map(|line| match line.strip_prefix('-') {
            Some(rest) => rest.trim_start(),
            None => line,
        })
        .filter(|line| {
            !line.is_empty()
                && !line.contains(char::is_whitespace)
                && !REPORT_HEADER_WORDS.iter().any(|w| line.starts_with(w))
        })
        .map(str::to_string)
        .collect()
}
