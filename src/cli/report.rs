//! Report formatting and printing utilities.
//!
//! Engines return plain data; everything the user sees is rendered here.
//! Each printer writes to any `io::Write` so output can be tested.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::core::{ConsolidationEvent, ConsolidationReport, DeletionReport, RuleOverlap};
use crate::issues::AuditOutcome;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Maximum number of keys listed in a deletion preview.
const MAX_KEYS_DISPLAY: usize = 10;

const DRY_RUN_TAG: &str = "[DRY RUN]";

fn plural(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 { singular } else { plural }
}

// ============================================================
// Consolidation
// ============================================================

/// Print warnings for rule tables whose rules interact.
pub fn print_overlaps(overlaps: &[RuleOverlap]) {
    print_overlaps_to(overlaps, &mut io::stderr().lock());
}

pub fn print_overlaps_to<W: Write>(overlaps: &[RuleOverlap], writer: &mut W) {
    for overlap in overlaps {
        let message = match overlap {
            RuleOverlap::SharedOldKey { key, new_keys } => format!(
                "{} is superseded by several rules ({}); the first one wins",
                key,
                new_keys.join(", ")
            ),
            RuleOverlap::NewKeyIsOldKey { key, superseded_by } => format!(
                "{} is created by one rule and superseded by {}; it will be deleted",
                key, superseded_by
            ),
        };
        let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), message);
    }
}

pub fn print_consolidation(report: &ConsolidationReport) {
    print_consolidation_to(report, &mut io::stdout().lock());
}

pub fn print_consolidation_to<W: Write>(report: &ConsolidationReport, writer: &mut W) {
    for event in &report.events {
        match event {
            ConsolidationEvent::KeyAdded { key, value } => {
                let _ = writeln!(writer, "Adding new key: {} = \"{}\"", key.green(), value);
            }
            ConsolidationEvent::NewKeyAlreadyExists {
                key,
                existing: Some(existing),
                intended,
            } if existing != intended => {
                let _ = writeln!(
                    writer,
                    "{}",
                    format!(
                        "Keeping existing {} = \"{}\" (rule value \"{}\")",
                        key, existing, intended
                    )
                    .dimmed()
                );
            }
            ConsolidationEvent::NewKeyAlreadyExists { .. } => {}
            ConsolidationEvent::Rewrote {
                file,
                old_key,
                new_key,
                occurrences,
            } => {
                let _ = writeln!(
                    writer,
                    "  Replacing {} -> {} in {} ({} {})",
                    old_key,
                    new_key,
                    file.display(),
                    occurrences,
                    plural(*occurrences, "occurrence", "occurrences")
                );
            }
            ConsolidationEvent::KeyAlreadyAbsent { key, new_key } => {
                let _ = writeln!(
                    writer,
                    "{}",
                    format!("  Skipping {}: already consolidated into {}", key, new_key).dimmed()
                );
            }
        }
    }

    let _ = writeln!(
        writer,
        "\nDeleting {} old {}...",
        report.deleted_keys.len(),
        plural(report.deleted_keys.len(), "key", "keys")
    );

    let _ = writeln!(writer);
    if report.dry_run {
        let _ = writeln!(writer, "{} Summary:", DRY_RUN_TAG.yellow());
    } else {
        let _ = writeln!(writer, "Summary:");
    }
    let _ = writeln!(writer, "  Total replacements: {}", report.replacements);
    let _ = writeln!(writer, "  Files modified: {}", report.files_modified);
    let _ = writeln!(writer, "  Keys deleted: {}", report.deleted_keys.len());
    let _ = writeln!(writer, "  Keys remaining: {}", report.keys_remaining);

    if report.dry_run {
        let _ = writeln!(writer, "\n{} No files written.", DRY_RUN_TAG.yellow());
    }
}

// ============================================================
// Deletion
// ============================================================

pub fn print_deletion(report: &DeletionReport, catalog_path: &Path) {
    print_deletion_to(report, catalog_path, &mut io::stdout().lock());
}

pub fn print_deletion_to<W: Write>(report: &DeletionReport, catalog_path: &Path, writer: &mut W) {
    let _ = writeln!(writer, "Catalog: {}", catalog_path.display());
    let _ = writeln!(writer, "Total keys in file: {}", report.total_before);
    let _ = writeln!(
        writer,
        "Keys requested for deletion: {}",
        report.requested.len()
    );
    let _ = writeln!(
        writer,
        "Keys found and will be deleted: {}",
        report.deleted.len()
    );

    if !report.not_found.is_empty() {
        let _ = writeln!(
            writer,
            "Keys not found (skipped): {}",
            report.not_found.len()
        );
        for key in &report.not_found {
            let _ = writeln!(writer, "{}", format!("  - {}", key).dimmed());
        }
    }

    if report.deleted.is_empty() {
        let _ = writeln!(writer, "\nNo keys to delete.");
        return;
    }

    let _ = writeln!(writer, "\nKeys to delete ({}):", report.deleted.len());
    for key in report.deleted.iter().take(MAX_KEYS_DISPLAY) {
        let _ = writeln!(writer, "  - {}", key);
    }
    if report.deleted.len() > MAX_KEYS_DISPLAY {
        let _ = writeln!(
            writer,
            "  ... and {} more",
            report.deleted.len() - MAX_KEYS_DISPLAY
        );
    }

    if report.dry_run {
        let _ = writeln!(writer, "\n{} No changes made.", DRY_RUN_TAG.yellow());
        let _ = writeln!(
            writer,
            "Would delete {} {}, leaving {} {}.",
            report.deleted.len(),
            plural(report.deleted.len(), "key", "keys"),
            report.remaining,
            plural(report.remaining, "key", "keys")
        );
    } else {
        let _ = writeln!(
            writer,
            "\n{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Deleted {} {}.",
                report.deleted.len(),
                plural(report.deleted.len(), "key", "keys")
            )
            .green()
        );
        let _ = writeln!(writer, "Keys remaining: {}", report.remaining);
    }
}

/// Print a fatal condition that refused the whole operation.
pub fn print_refusal(message: &str) {
    print_refusal_to(message, &mut io::stderr().lock());
}

pub fn print_refusal_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), message.red());
}

pub fn print_delete_usage() {
    print_delete_usage_to(&mut io::stderr().lock());
}

pub fn print_delete_usage_to<W: Write>(writer: &mut W) {
    let _ = writeln!(writer, "{} No keys provided. Usage:", "error:".bold().red());
    let _ = writeln!(writer, "  msgtidy delete key1 key2 key3");
    let _ = writeln!(writer, "  msgtidy delete --dry-run key1 key2");
    let _ = writeln!(writer, "  msgtidy audit unused | msgtidy delete --stdin");
}

// ============================================================
// Audit
// ============================================================

pub fn print_audit(outcomes: &[AuditOutcome]) {
    print_audit_to(outcomes, &mut io::stdout().lock());
}

/// Print each check's status line followed by its plain-text report.
///
/// Status lines always contain a space, so piping this output into
/// `delete --stdin` only picks up the keys listed in reports.
pub fn print_audit_to<W: Write>(outcomes: &[AuditOutcome], writer: &mut W) {
    for outcome in outcomes {
        if outcome.passed() {
            let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), outcome.check);
        } else {
            let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), outcome.check);
            let _ = writeln!(writer, "\n{}\n", outcome.report);
        }
    }

    let passed = outcomes.iter().filter(|o| o.passed()).count();
    let summary = format!(
        "{} of {} {} passed",
        passed,
        outcomes.len(),
        plural(outcomes.len(), "check", "checks")
    );
    if passed == outcomes.len() {
        let _ = writeln!(writer, "{}", summary.green());
    } else {
        let _ = writeln!(writer, "{}", summary.red());
    }
}
