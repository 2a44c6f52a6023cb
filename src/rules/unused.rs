//! Unused translation key detection rule.
//!
//! Detects catalog keys whose accessor pattern never appears in the scanned
//! source files.

use crate::{
    core::{Accessor, Catalog, KeyPolicy, SourceFile, find_unused},
    issues::UnusedKeyIssue,
};

/// Check for unused translation keys.
///
/// Keys under a dynamic prefix are never reported, since they are reached
/// through runtime-composed names the scan cannot see. Issues are in
/// catalog order.
pub fn check_unused_keys(
    catalog: &Catalog,
    files: &[SourceFile],
    accessor: &Accessor,
    policy: &KeyPolicy,
) -> Vec<UnusedKeyIssue> {
    find_unused(catalog.keys(), files, accessor, policy)
        .into_iter()
        .map(|key| UnusedKeyIssue { key })
        .collect()
}
