//! Issue types for catalog audits.
//!
//! Each issue is self-contained: it carries everything the report needs to
//! describe it. Reports are plain text so they can be piped verbatim into
//! `msgtidy delete --stdin`.

use enum_dispatch::enum_dispatch;

// ============================================================
// Audit checks
// ============================================================

/// Audit check identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, clap::ValueEnum)]
pub enum AuditCheck {
    /// Keys with no call site in the source tree.
    Unused,
    /// Values shared by several keys.
    Duplicates,
    /// Single-word values outside the shared namespace.
    Naming,
    /// Keys that do not follow the naming grammar.
    KeyFormat,
}

impl AuditCheck {
    pub fn all() -> Vec<Self> {
        vec![Self::Unused, Self::Duplicates, Self::Naming, Self::KeyFormat]
    }
}

impl std::fmt::Display for AuditCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditCheck::Unused => write!(f, "unused"),
            AuditCheck::Duplicates => write!(f, "duplicates"),
            AuditCheck::Naming => write!(f, "naming"),
            AuditCheck::KeyFormat => write!(f, "key-format"),
        }
    }
}

// ============================================================
// Issues
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedKeyIssue {
    pub key: String,
}

/// Keys sharing one value. `keys` are in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateValueIssue {
    pub value: String,
    pub keys: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingIssue {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedKeyIssue {
    pub key: String,
}

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    UnusedKey(UnusedKeyIssue),
    DuplicateValue(DuplicateValueIssue),
    Naming(NamingIssue),
    MalformedKey(MalformedKeyIssue),
}

/// Common reporting interface for all issue types.
#[enum_dispatch]
pub trait Report {
    fn check(&self) -> AuditCheck;

    /// Lines listing this issue in its check's report.
    fn lines(&self) -> Vec<String>;
}

impl Report for UnusedKeyIssue {
    fn check(&self) -> AuditCheck {
        AuditCheck::Unused
    }

    fn lines(&self) -> Vec<String> {
        vec![format!("  - {}", self.key)]
    }
}

impl Report for DuplicateValueIssue {
    fn check(&self) -> AuditCheck {
        AuditCheck::Duplicates
    }

    fn lines(&self) -> Vec<String> {
        std::iter::once(format!("  \"{}\":", self.value))
            .chain(self.keys.iter().map(|k| format!("    - {}", k)))
            .collect()
    }
}

impl Report for NamingIssue {
    fn check(&self) -> AuditCheck {
        AuditCheck::Naming
    }

    fn lines(&self) -> Vec<String> {
        vec![format!("  - {}: \"{}\"", self.key, self.value)]
    }
}

impl Report for MalformedKeyIssue {
    fn check(&self) -> AuditCheck {
        AuditCheck::KeyFormat
    }

    fn lines(&self) -> Vec<String> {
        vec![format!("  - {}", self.key)]
    }
}

// ============================================================
// Audit outcome
// ============================================================

/// Pass/fail result of one check plus its human-readable report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditOutcome {
    pub check: AuditCheck,
    pub issues: Vec<Issue>,
    /// Empty when the check passed.
    pub report: String,
}

impl AuditOutcome {
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Context the report texts mention.
pub struct ReportContext<'a> {
    /// Catalog file name, e.g. `en.json`.
    pub catalog_name: &'a str,
    /// Shared-terms prefix, e.g. `common_`.
    pub shared_prefix: &'a str,
}

/// Build the outcome of `check` from its issues.
pub fn outcome(check: AuditCheck, issues: Vec<Issue>, ctx: &ReportContext<'_>) -> AuditOutcome {
    let report = if issues.is_empty() {
        String::new()
    } else {
        render(check, &issues, ctx)
    };
    AuditOutcome {
        check,
        issues,
        report,
    }
}

fn render(check: AuditCheck, issues: &[Issue], ctx: &ReportContext<'_>) -> String {
    let count = issues.len();
    let (header, footer) = match check {
        AuditCheck::Unused => (
            format!(
                "Found {} unused translation keys in {}:",
                count, ctx.catalog_name
            ),
            format!(
                "Remove these keys from {} or use them in the codebase.",
                ctx.catalog_name
            ),
        ),
        AuditCheck::Duplicates => (
            format!(
                "Found {} duplicate translation values in {}:",
                count, ctx.catalog_name
            ),
            format!("Consolidate these into {} keys.", ctx.shared_prefix),
        ),
        AuditCheck::Naming => {
            let example = issues
                .iter()
                .find_map(|i| match i {
                    Issue::Naming(n) => Some(n.value.to_lowercase()),
                    _ => None,
                })
                .unwrap_or_default();
            (
                format!(
                    "Found {} single-word translations without {} prefix:",
                    count, ctx.shared_prefix
                ),
                format!(
                    "Rename these keys to use the {} prefix (e.g., {}{}).",
                    ctx.shared_prefix, ctx.shared_prefix, example
                ),
            )
        }
        AuditCheck::KeyFormat => (
            format!(
                "Found {} malformed translation keys in {}:",
                count, ctx.catalog_name
            ),
            "Keys must be letter/digit segments joined by single underscores.".to_string(),
        ),
    };

    // Duplicate groups are separated by blank lines
    let separator = if check == AuditCheck::Duplicates {
        "\n\n"
    } else {
        "\n"
    };
    let body = issues
        .iter()
        .map(|issue| issue.lines().join("\n"))
        .collect::<Vec<_>>()
        .join(separator);

    format!("{}\n\n{}\n\n{}", header, body, footer)
}
