//! Audit rules.
//!
//! Each rule is a pure function over the loaded catalog (and, for `unused`,
//! the scanned sources) returning its own issue type. [`run_audit`] runs a
//! selection of them and renders their reports.
//!
//! ## Module Structure
//!
//! - `unused`: Keys never called through the accessor
//! - `duplicates`: Values shared by several keys
//! - `naming`: Single-word values outside the shared namespace, malformed keys

pub mod duplicates;
pub mod naming;
pub mod unused;

use std::collections::BTreeSet;

use crate::{
    core::{Accessor, Catalog, KeyPolicy, SourceFile},
    issues::{AuditCheck, AuditOutcome, Issue, ReportContext, outcome},
};

pub use duplicates::check_duplicate_values;
pub use naming::{check_key_format, check_naming, is_single_word};
pub use unused::check_unused_keys;

/// Everything the audit rules read.
pub struct AuditInput<'a> {
    pub catalog: &'a Catalog,
    /// Only consulted by the `unused` check.
    pub files: &'a [SourceFile],
    pub accessor: &'a Accessor,
    pub policy: &'a KeyPolicy,
    /// Catalog file name shown in reports.
    pub catalog_name: &'a str,
}

/// Run `checks` (deduplicated, in canonical order) against `input`.
pub fn run_audit(input: &AuditInput<'_>, checks: &[AuditCheck]) -> Vec<AuditOutcome> {
    let ctx = ReportContext {
        catalog_name: input.catalog_name,
        shared_prefix: &input.policy.shared_prefix,
    };

    let selected: BTreeSet<AuditCheck> = checks.iter().copied().collect();
    selected
        .into_iter()
        .map(|check| outcome(check, run_check(input, check), &ctx))
        .collect()
}

fn run_check(input: &AuditInput<'_>, check: AuditCheck) -> Vec<Issue> {
    match check {
        AuditCheck::Unused => {
            check_unused_keys(input.catalog, input.files, input.accessor, input.policy)
                .into_iter()
                .map(Issue::from)
                .collect()
        }
        AuditCheck::Duplicates => {
            check_duplicate_values(input.catalog, &input.policy.allowed_duplicates)
                .into_iter()
                .map(Issue::from)
                .collect()
        }
        AuditCheck::Naming => check_naming(input.catalog, input.policy)
            .into_iter()
            .map(Issue::from)
            .collect(),
        AuditCheck::KeyFormat => check_key_format(input.catalog)
            .into_iter()
            .map(Issue::from)
            .collect(),
    }
}
