//! Catalog integrity and consolidation engine.
//!
//! ```text
//! CatalogStore ──load──▶ Catalog ◀──────────────┐
//!                          │                    │ mutate
//! scan ──▶ [SourceFile] ───┼──▶ usage (audit)   │
//!                          └──▶ consolidate ────┤
//!                               delete_keys ────┘──save──▶ CatalogStore
//! ```
//!
//! Everything runs sequentially in one invocation. The catalog is a single
//! owned value passed by reference through the pipeline.

pub mod catalog;
pub mod consolidate;
pub mod context;
pub mod delete;
pub mod policy;
pub mod rule_table;
pub mod scanner;
pub mod usage;

pub use catalog::{Catalog, CatalogStore, SaveOrder};
pub use consolidate::{
    ConsolidationEvent, ConsolidationReport, ConsolidationRule, RuleOverlap, consolidate,
    find_overlaps,
};
pub use context::Workspace;
pub use delete::{DeletionReport, MAX_DELETE_PERCENTAGE, delete_keys, parse_key_batch};
pub use policy::KeyPolicy;
pub use scanner::{ScanOptions, SourceFile, scan};
pub use usage::{Accessor, UsageIndex, find_unused, is_used};
