//! Naming convention rules.
//!
//! Single concept words (e.g. "Email") belong in the shared namespace
//! instead of being duplicated per feature area.

use crate::{
    core::{Catalog, KeyPolicy},
    issues::{MalformedKeyIssue, NamingIssue},
    utils::is_well_formed_key,
};

/// A value is single-word when it has no space and no `{` placeholder.
pub fn is_single_word(value: &str) -> bool {
    !value.is_empty() && !value.contains(' ') && !value.contains('{')
}

/// Report single-word values whose key is neither shared nor dynamic.
pub fn check_naming(catalog: &Catalog, policy: &KeyPolicy) -> Vec<NamingIssue> {
    catalog
        .strings()
        .filter(|(key, _)| !policy.is_shared(key) && !policy.is_dynamic(key))
        .filter(|(_, value)| is_single_word(value))
        .map(|(key, value)| NamingIssue {
            key: key.to_string(),
            value: value.to_string(),
        })
        .collect()
}

/// Report keys that break the `segment_segment` grammar.
pub fn check_key_format(catalog: &Catalog) -> Vec<MalformedKeyIssue> {
    catalog
        .keys()
        .filter(|key| !is_well_formed_key(key))
        .map(|key| MalformedKeyIssue {
            key: key.to_string(),
        })
        .collect()
}
