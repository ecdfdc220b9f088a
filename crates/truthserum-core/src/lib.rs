//! truthserum-core: topic-aware query expansion.
//!
//! This crate owns the static topic table and the two pure functions built on
//! it, plus the configuration and record types shared with the search layer.
//!
//! # Architecture
//!
//! ```text
//! Topic table ──► Expander ──► Search request builder ──► Text store
//!      │
//!      └────────► Detector ──► UI label
//! ```
//!
//! Nothing here performs I/O except [`config::Config::load`]. The table is
//! `'static` and read-only, so every function may be called from any number
//! of threads without coordination.

pub mod config;
pub mod detect;
pub mod error;
pub mod expand;
pub mod topics;
pub mod types;

pub use detect::detect_topic;
pub use error::{ConfigError, TableError};
pub use expand::{expand_search_query, ExpandedQuery};
pub use topics::{TopicEntry, TopicTable};
pub use types::{Hadith, SearchField};
