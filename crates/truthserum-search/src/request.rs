//! Search request builder: turns a debounced raw query into the substring
//! predicate sent to the text store.
//!
//! The trimmed raw query is always the primary term, matched against every
//! configured field. When expansion is on, each additional term from the
//! topic table is OR'd in against the same fields. Terms are never weighted.

use crate::{
    error::SearchError,
    predicate::{Clause, Predicate},
};
use serde::Serialize;
use std::collections::HashSet;
use truthserum_core::{
    config::{SearchConfig, MAX_LIMIT},
    SearchField, TopicTable,
};

// ---------------------------------------------------------------------------
// SearchRequest
// ---------------------------------------------------------------------------

/// A validated search, ready to be compiled into a [`Predicate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    query: String,
    topic: Option<&'static str>,
    fields: Vec<SearchField>,
    terms: Vec<String>,
    limit: usize,
}

impl SearchRequest {
    pub fn builder(query: impl Into<String>) -> SearchRequestBuilder {
        SearchRequestBuilder::new(query)
    }

    /// Build with the fields, limit and expansion switch from `config`.
    pub fn from_config(query: &str, config: &SearchConfig) -> Result<Option<Self>, SearchError> {
        Self::builder(query)
            .fields(config.fields.iter().copied())
            .limit(config.limit)
            .expand(config.expand)
            .min_query_len(config.min_query_len)
            .build()
    }

    /// The trimmed raw query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Single-label topic of the query, for display next to results.
    pub fn topic(&self) -> Option<&'static str> {
        self.topic
    }

    pub fn fields(&self) -> &[SearchField] {
        &self.fields
    }

    /// Expansion terms OR'd after the primary query, excluding any that only
    /// differ from an earlier term by case.
    pub fn expansion_terms(&self) -> &[String] {
        &self.terms
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// One clause per `(term, field)`: the raw query's clauses first, then
    /// each expansion term's, in order. Terms with no literal left after
    /// dropping `*` contribute nothing.
    pub fn predicate(&self) -> Predicate {
        std::iter::once(&self.query)
            .chain(self.terms.iter())
            .flat_map(|term| {
                self.fields
                    .iter()
                    .map(move |field| Clause::new(*field, term.as_str()))
            })
            .filter(Clause::has_literal)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Fluent builder for [`SearchRequest`].
///
/// # Example
///
/// ```rust
/// use truthserum_search::SearchRequest;
///
/// let request = SearchRequest::builder("salah")
///     .limit(20)
///     .build()
///     .unwrap()
///     .expect("non-empty query");
/// assert_eq!(request.topic(), Some("prayer"));
/// ```
#[derive(Debug, Clone)]
pub struct SearchRequestBuilder {
    query: String,
    fields: Vec<SearchField>,
    expand: bool,
    limit: usize,
    min_query_len: usize,
}

impl SearchRequestBuilder {
    pub fn new(query: impl Into<String>) -> Self {
        let defaults = SearchConfig::default();
        Self {
            query: query.into(),
            fields: defaults.fields,
            expand: defaults.expand,
            limit: defaults.limit,
            min_query_len: defaults.min_query_len,
        }
    }

    /// Replace the field list. Duplicates are dropped, first occurrence wins.
    pub fn fields(mut self, fields: impl IntoIterator<Item = SearchField>) -> Self {
        self.fields = fields.into_iter().collect();
        self
    }

    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn min_query_len(mut self, min: usize) -> Self {
        self.min_query_len = min;
        self
    }

    /// Validate and build.
    ///
    /// Returns `Ok(None)` when the trimmed query is empty, is nothing but `*`,
    /// or is shorter than the minimum length; callers show an empty result
    /// list instead of querying.
    pub fn build(self) -> Result<Option<SearchRequest>, SearchError> {
        if self.fields.is_empty() {
            return Err(SearchError::NoFields);
        }
        if self.limit == 0 || self.limit > MAX_LIMIT {
            return Err(SearchError::InvalidLimit { got: self.limit, max: MAX_LIMIT });
        }

        let query = self.query.trim();
        let literal = query.chars().filter(|c| *c != '*').count();
        if literal == 0 || query.chars().count() < self.min_query_len {
            tracing::debug!(query = %query, min = self.min_query_len, "request: query too short");
            return Ok(None);
        }

        let mut seen_fields = HashSet::new();
        let fields: Vec<SearchField> = self
            .fields
            .into_iter()
            .filter(|f| seen_fields.insert(*f))
            .collect();

        let table = TopicTable::global();
        let terms = if self.expand {
            let expanded = table.expand(query);
            let mut seen = HashSet::from([query.to_lowercase()]);
            expanded
                .expansions()
                .iter()
                .filter(|t| seen.insert(t.to_lowercase()))
                .cloned()
                .collect()
        } else {
            Vec::new()
        };

        let request = SearchRequest {
            query: query.to_string(),
            topic: table.detect(query),
            fields,
            terms,
            limit: self.limit,
        };
        tracing::debug!(
            query = %request.query,
            topic = ?request.topic,
            terms = request.terms.len(),
            limit = request.limit,
            "request: built"
        );
        Ok(Some(request))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
