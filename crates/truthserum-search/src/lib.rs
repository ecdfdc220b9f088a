//! truthserum-search: from expanded query to store predicate.
//!
//! [`SearchRequest`] turns a raw query into an OR of substring [`Clause`]s
//! over the configured text columns. A [`TextStore`] evaluates it: the hosted
//! database through [`Predicate::to_postgrest`], or a [`MemoryStore`] over a
//! local JSONL corpus.

pub mod corpus;
pub mod error;
pub mod predicate;
pub mod request;
pub mod store;

pub use error::SearchError;
pub use predicate::{Clause, Predicate};
pub use request::{SearchRequest, SearchRequestBuilder};
pub use store::{MemoryStore, TextStore};
