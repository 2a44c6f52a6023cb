//! msgtidy - integrity and consolidation tooling for flat translation catalogs
//!
//! msgtidy keeps a flat key/value message catalog (e.g. `messages/en.json`)
//! consistent with the source tree that calls it through an accessor such as
//! `m.groups_editGroup()`. It finds unused keys, duplicate values, and naming
//! violations, merges duplicate keys into shared ones while rewriting every
//! call site, and deletes key batches behind a safety ceiling.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Catalog store, scanner, usage analysis, consolidation, deletion
//! - `error`: Typed errors returned by `core`
//! - `issues`: Audit issue types and report texts
//! - `rules`: Audit checks
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod issues;
pub mod rules;
pub mod utils;
