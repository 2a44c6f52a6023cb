//! Usage analysis: does any scanned file call a key's accessor?
//!
//! Detection is a literal substring search for `<accessor>.<key>(`. It does not
//! parse source files, so a key whose name is composed at runtime is invisible
//! to it; such keys must be exempted through a dynamic prefix.

use std::collections::HashSet;

use regex::Regex;

use super::{policy::KeyPolicy, scanner::SourceFile};

/// The receiver of generated message functions (e.g. `m` in `m.groups_editGroup(`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    namespace: String,
}

impl Accessor {
    pub fn new(namespace: &str) -> Self {
        Self {
            namespace: namespace.trim().to_string(),
        }
    }

    /// The literal call-site text for `key`.
    pub fn pattern(&self, key: &str) -> String {
        format!("{}.{}(", self.namespace, key)
    }

    /// Matches every call site and captures the key.
    fn call_site_regex(&self) -> Regex {
        let pattern = format!(r"{}\.([A-Za-z0-9_]+)\(", regex::escape(&self.namespace));
        Regex::new(&pattern).expect("escaped accessor namespace always forms a valid regex")
    }
}

impl Default for Accessor {
    fn default() -> Self {
        Self::new("m")
    }
}

/// Whether any file contains the literal accessor pattern for `key`.
///
/// Keys under a dynamic prefix always count as used. Costs one linear scan
/// of every file per call; use [`UsageIndex`] for batches.
pub fn is_used(key: &str, files: &[SourceFile], accessor: &Accessor, policy: &KeyPolicy) -> bool {
    if policy.is_dynamic(key) {
        return true;
    }
    let pattern = accessor.pattern(key);
    files.iter().any(|file| file.content.contains(&pattern))
}

/// Every key called through the accessor anywhere in the scanned files.
///
/// Built with a single pass over all content, so a batch lookup costs
/// O(total content) once instead of O(keys × files × content length).
/// For keys made of letters, digits and underscores the answer matches
/// [`is_used`] exactly: call-site matches cannot overlap, because a key
/// never contains `.` or `(`.
#[derive(Debug, Default)]
pub struct UsageIndex {
    called: HashSet<String>,
}

impl UsageIndex {
    pub fn build(files: &[SourceFile], accessor: &Accessor) -> Self {
        let re = accessor.call_site_regex();
        let called = files
            .iter()
            .flat_map(|file| re.captures_iter(&file.content))
            .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
            .collect();
        Self { called }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.called.contains(key)
    }
}

/// Keys (in input order) with no call site and no dynamic-prefix exemption.
pub fn find_unused<'a, I>(
    keys: I,
    files: &[SourceFile],
    accessor: &Accessor,
    policy: &KeyPolicy,
) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let index = UsageIndex::build(files, accessor);
    keys.into_iter()
        .filter(|key| !policy.is_dynamic(key))
        .filter(|key| {
            // Keys outside the call-site grammar cannot be captured by the index.
            if key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                !index.contains(key)
            } else {
                !is_used(key, files, accessor, policy)
            }
        })
        .map(str::to_string)
        .collect()
}

/// Count non-overlapping literal occurrences of `needle` in `haystack`.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}
