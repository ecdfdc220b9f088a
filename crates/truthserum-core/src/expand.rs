//! Query expansion: broaden a raw query into the flat set of terms that
//! should be treated as equivalent to it.
//!
//! The lowercased query is tested against every topic independently. Each
//! matching topic contributes its key and all of its synonyms; the union is
//! returned alongside the literal query, with duplicates collapsed.

use crate::topics::TopicTable;
use serde::Serialize;

/// Deduplicated set of search terms produced by [`TopicTable::expand`].
///
/// Iteration yields terms in insertion order: the original query first, then
/// each matched topic's key and synonyms in table order. Only membership is
/// contractual; the order is kept for stable output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpandedQuery {
    terms: Vec<String>,
    topics: Vec<&'static str>,
}

impl ExpandedQuery {
    fn new(query: &str) -> Self {
        Self {
            terms: vec![query.to_string()],
            topics: Vec::new(),
        }
    }

    fn insert(&mut self, term: &str) {
        if !self.contains(term) {
            self.terms.push(term.to_string());
        }
    }

    /// The query exactly as it was passed in, casing included.
    pub fn original(&self) -> &str {
        &self.terms[0]
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }

    /// Topic keys that matched, in table order.
    pub fn topics(&self) -> &[&'static str] {
        &self.topics
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Every term except the original query.
    pub fn expansions(&self) -> &[String] {
        &self.terms[1..]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.terms.iter()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Always false: the original query is always a member.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.terms
    }
}

impl<'a> IntoIterator for &'a ExpandedQuery {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl TopicTable {
    /// Expand `query` with every topic whose key or synonym it contains.
    pub fn expand(&self, query: &str) -> ExpandedQuery {
        let lowered = query.to_lowercase();
        let mut expanded = ExpandedQuery::new(query);

        for entry in self.iter().filter(|e| e.matches(&lowered)) {
            expanded.topics.push(entry.topic);
            for term in entry.terms() {
                expanded.insert(term);
            }
        }

        tracing::debug!(
            query = %query,
            topics = ?expanded.topics,
            terms = expanded.len(),
            "expand: query expanded"
        );
        expanded
    }
}

/// Expand `query` against the built-in topic table.
pub fn expand_search_query(query: &str) -> ExpandedQuery {
    TopicTable::global().expand(query)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn empty_query_expands_to_itself() {
        let expanded = expand_search_query("");
        assert_eq!(expanded.terms(), &[String::new()]);
        assert!(expanded.topics().is_empty());
        assert!(expanded.expansions().is_empty());
    }

    #[test]
    fn unmatched_query_is_a_singleton() {
        let expanded = expand_search_query("xyz qqq");
        assert_eq!(expanded.into_vec(), vec!["xyz qqq".to_string()]);
    }

    #[test]
    fn query_equal_to_synonym_is_not_duplicated() {
        let expanded = expand_search_query("salah");
        let prayer = TopicTable::global().get("prayer").unwrap();
        assert_eq!(expanded.len(), prayer.synonyms.len() + 1);
        assert_eq!(expanded.original(), "salah");
        assert_eq!(expanded.expansions()[0], "prayer");
    }

    #[test]
    fn topics_are_reported_in_table_order() {
        let expanded = expand_search_query("zakat after wudu");
        assert_eq!(expanded.topics(), &["charity", "washing"]);
    }

    #[test]
    fn whitespace_only_query_is_preserved() {
        let expanded = expand_search_query("   ");
        assert_eq!(expanded.original(), "   ");
        assert_eq!(expanded.len(), 1);
    }

    proptest! {
        #[test]
        fn prop_original_always_present(q in ".{0,64}") {
            let expanded = expand_search_query(&q);
            prop_assert!(expanded.contains(&q));
            prop_assert_eq!(expanded.original(), q.as_str());
        }

        #[test]
        fn prop_terms_are_unique(q in "[a-z ]{0,40}") {
            let expanded = expand_search_query(&q);
            let unique: std::collections::HashSet<_> = expanded.iter().collect();
            prop_assert_eq!(unique.len(), expanded.len());
        }
    }
}
