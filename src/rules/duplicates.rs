//! Duplicate value detection rule.

use std::collections::{HashMap, HashSet};

use crate::{core::Catalog, issues::DuplicateValueIssue};

/// Group keys by identical value and report every group of two or more.
///
/// A group is exempt when any one of its keys is allow-listed: the
/// allow-list records a deliberate human override for the whole group,
/// not just for the listed key. Groups are ordered by first appearance.
pub fn check_duplicate_values(
    catalog: &Catalog,
    allowed: &HashSet<String>,
) -> Vec<DuplicateValueIssue> {
    let mut groups: Vec<DuplicateValueIssue> = Vec::new();
    let mut by_value: HashMap<&str, usize> = HashMap::new();

    for (key, value) in catalog.strings() {
        match by_value.get(value) {
            Some(&idx) => groups[idx].keys.push(key.to_string()),
            None => {
                by_value.insert(value, groups.len());
                groups.push(DuplicateValueIssue {
                    value: value.to_string(),
                    keys: vec![key.to_string()],
                });
            }
        }
    }

    groups
        .into_iter()
        .filter(|group| group.keys.len() > 1)
        .filter(|group| !group.keys.iter().any(|k| allowed.contains(k)))
        .collect()
}
