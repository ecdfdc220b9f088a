//! TruthSerum: topic-aware query expansion for hadith text search.
//!
//! This crate wires the two library layers into the outer surfaces: the
//! `truthserum` CLI and an HTTP API. The layers themselves live in
//! workspace crates so integration tests and benches can import them directly.
//!
//! # Architecture
//!
//! ```text
//! truthserum-core ──► truthserum-search ──► cli / server
//!  (table, expand,     (request builder,
//!   detect, config)     predicate, stores)
//! ```
//!
//! Expansion and detection are synchronous and pure. Only `serve` starts a
//! `tokio` runtime.

pub mod api;
pub mod cli;
pub mod server;
