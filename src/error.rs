//! Error taxonomy for catalog and source tree operations.
//!
//! Every fatal condition the engine can hit is a [`CatalogError`] variant.
//! Advisory conditions (a key already absent, a new key already present,
//! a requested key not found) are not errors; they are carried as data in
//! the operation reports.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {}: {source}", path.display())]
    CatalogRead { path: PathBuf, source: io::Error },

    #[error("Failed to parse catalog {}: {reason}", path.display())]
    CatalogParse { path: PathBuf, reason: String },

    #[error("Failed to write catalog {}: {source}", path.display())]
    CatalogWrite { path: PathBuf, source: io::Error },

    /// An unreadable entry aborts the whole scan; a partial scan would
    /// report used keys as unused and leave call sites unrewritten.
    #[error("Failed to scan {}: {source}", path.display())]
    Scan { path: PathBuf, source: io::Error },

    #[error("Failed to write source file {}: {source}", path.display())]
    SourceWrite { path: PathBuf, source: io::Error },

    #[error(
        "SAFETY CHECK FAILED: attempting to delete {percentage:.1}% of all keys ({present} of {total}). \
         Refusing to delete more than 50% of keys."
    )]
    SafetyThresholdExceeded {
        percentage: f64,
        present: usize,
        total: usize,
    },

    #[error("Invalid consolidation rule: {reason}")]
    InvalidRule { reason: String },
}

pub type CatalogResult<T> = Result<T, CatalogError>;
