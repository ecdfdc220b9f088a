//! Text stores: where a compiled predicate is finally evaluated.
//!
//! The production store is the hosted database, reached through its REST
//! layer with [`Predicate::to_postgrest`](crate::Predicate::to_postgrest).
//! [`MemoryStore`] evaluates the same predicate locally over a loaded corpus.

use crate::{corpus, error::SearchError, request::SearchRequest};
use std::path::Path;
use truthserum_core::{Hadith, SearchField};

/// Anything that can answer a [`SearchRequest`].
pub trait TextStore: Send + Sync {
    /// Matching records, in store order, at most `request.limit()` of them.
    fn search(&self, request: &SearchRequest) -> Result<Vec<Hadith>, SearchError>;
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// A row plus lowercase copies of its searchable text, folded once at load.
#[derive(Debug, Clone)]
struct Row {
    hadith: Hadith,
    english: String,
    arabic: Option<String>,
    narrator: Option<String>,
}

impl Row {
    fn new(hadith: Hadith) -> Self {
        Self {
            english: hadith.english.to_lowercase(),
            arabic: hadith.arabic.as_deref().map(str::to_lowercase),
            narrator: hadith.narrator.as_deref().map(str::to_lowercase),
            hadith,
        }
    }

    fn lowered(&self, field: SearchField) -> Option<&str> {
        match field {
            SearchField::English => Some(self.english.as_str()),
            SearchField::Arabic => self.arabic.as_deref(),
            SearchField::Narrator => self.narrator.as_deref(),
        }
    }
}

/// In-memory corpus answering requests by linear scan.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    rows: Vec<Row>,
}

impl MemoryStore {
    pub fn new(corpus: Vec<Hadith>) -> Self {
        corpus.into_iter().collect()
    }

    /// Load a JSONL corpus file.
    pub fn from_jsonl(path: &Path) -> Result<Self, SearchError> {
        Ok(Self::new(corpus::load_jsonl(path)?))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<Hadith> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = Hadith>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().map(Row::new).collect(),
        }
    }
}

impl TextStore for MemoryStore {
    fn search(&self, request: &SearchRequest) -> Result<Vec<Hadith>, SearchError> {
        let predicate = request.predicate();
        let hits: Vec<Hadith> = self
            .rows
            .iter()
            .filter(|row| predicate.matches_by(|field| row.lowered(field)))
            .take(request.limit())
            .map(|row| row.hadith.clone())
            .collect();
        tracing::debug!(
            query = %request.query(),
            clauses = predicate.len(),
            hits = hits.len(),
            "store: memory search"
        );
        Ok(hits)
    }
}
