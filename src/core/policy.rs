use std::collections::HashSet;

/// Naming and exemption policy shared by the audit checks.
#[derive(Debug, Clone)]
pub struct KeyPolicy {
    /// Namespace prefix for shared single-concept terms (e.g. `common_`).
    pub shared_prefix: String,
    /// Keys under these prefixes are looked up through runtime-composed
    /// names, so static usage scanning cannot see them.
    pub dynamic_prefixes: Vec<String>,
    /// Allow-listing one key exempts its entire duplicate-value group.
    pub allowed_duplicates: HashSet<String>,
    /// Reserved key excluded from every semantic check.
    pub metadata_key: String,
}

impl KeyPolicy {
    pub fn is_dynamic(&self, key: &str) -> bool {
        self.dynamic_prefixes
            .iter()
            .any(|prefix| key.starts_with(prefix.as_str()))
    }

    pub fn is_shared(&self, key: &str) -> bool {
        key.starts_with(self.shared_prefix.as_str())
    }
}

impl Default for KeyPolicy {
    fn default() -> Self {
        Self {
            shared_prefix: "common_".to_string(),
            dynamic_prefixes: vec!["errors_".to_string()],
            allowed_duplicates: HashSet::new(),
            metadata_key: "$schema".to_string(),
        }
    }
}
