//! JSON shapes shared by the CLI output and the HTTP surface.

use serde::Serialize;
use truthserum_core::{ExpandedQuery, Hadith};
use truthserum_search::{SearchError, SearchRequest, TextStore};

#[derive(Debug, Clone, Serialize)]
pub struct ExpandResponse {
    pub query: String,
    pub topics: Vec<&'static str>,
    pub terms: Vec<String>,
}

impl From<ExpandedQuery> for ExpandResponse {
    fn from(expanded: ExpandedQuery) -> Self {
        Self {
            query: expanded.original().to_string(),
            topics: expanded.topics().to_vec(),
            terms: expanded.into_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DetectResponse {
    pub query: String,
    pub topic: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub topic: Option<&'static str>,
    /// Every term OR'd into the predicate, raw query first.
    pub terms: Vec<String>,
    /// The same predicate as the hosted store would receive it.
    pub filter: String,
    pub total: usize,
    pub results: Vec<Hadith>,
}

impl SearchResponse {
    /// Response for a query too short to be sent anywhere.
    pub fn empty(query: &str) -> Self {
        Self {
            query: query.trim().to_string(),
            topic: None,
            terms: Vec::new(),
            filter: String::new(),
            total: 0,
            results: Vec::new(),
        }
    }
}

/// Run `request` against `store` and package the outcome.
pub fn run_search<S>(store: &S, request: &SearchRequest) -> Result<SearchResponse, SearchError>
where
    S: TextStore + ?Sized,
{
    let results = store.search(request)?;
    let terms = std::iter::once(request.query().to_string())
        .chain(request.expansion_terms().iter().cloned())
        .collect();
    Ok(SearchResponse {
        query: request.query().to_string(),
        topic: request.topic(),
        terms,
        filter: request.predicate().to_postgrest(),
        total: results.len(),
        results,
    })
}
