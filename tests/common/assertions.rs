//! Domain-specific assertion macros for truthserum harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* topic or record was missing from an expansion or a
//! result set.

use truthserum_core::{ExpandedQuery, Hadith, TopicTable};

// ---------------------------------------------------------------------------
// Expansion assertions
// ---------------------------------------------------------------------------

/// Assert that an expansion contains a topic's key and every one of its
/// synonyms.
///
/// ```rust
/// assert_expands_topic!(expand_search_query("salah"), "prayer");
/// ```
#[macro_export]
macro_rules! assert_expands_topic {
    ($expanded:expr, $topic:expr) => {{
        let expanded: &truthserum_core::ExpandedQuery = &$expanded;
        let topic: &str = $topic;
        let entry = truthserum_core::TopicTable::global()
            .get(topic)
            .unwrap_or_else(|| panic!("assert_expands_topic! failed: no topic {:?}", topic));
        let missing: Vec<&str> = entry.terms().filter(|t| !expanded.contains(t)).collect();
        if !missing.is_empty() {
            panic!(
                "assert_expands_topic! failed for {:?}:\n  query:   {:?}\n  missing: {:?}",
                topic,
                expanded.original(),
                missing
            );
        }
    }};
}

/// Assert that an expansion contains nothing contributed by a topic beyond
/// what the literal query already provides.
#[macro_export]
macro_rules! assert_not_expands_topic {
    ($expanded:expr, $topic:expr) => {{
        let expanded: &truthserum_core::ExpandedQuery = &$expanded;
        let topic: &str = $topic;
        if expanded.topics().contains(&topic) {
            panic!(
                "assert_not_expands_topic! failed: {:?} matched {:?}.\n  topics: {:?}",
                expanded.original(),
                topic,
                expanded.topics()
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Result assertions
// ---------------------------------------------------------------------------

/// Assert that a result set holds exactly the given record ids, in order.
///
/// ```rust
/// assert_result_ids!(results, [1, 2, 5]);
/// ```
#[macro_export]
macro_rules! assert_result_ids {
    ($results:expr, [$($id:expr),* $(,)?]) => {{
        let results: &[truthserum_core::Hadith] = &$results;
        let actual: Vec<u64> = results.iter().map(|h| h.id).collect();
        let expected: Vec<u64> = vec![$($id),*];
        pretty_assertions::assert_eq!(actual, expected, "result ids differ");
    }};
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Terms of `topic`, key first, as owned strings.
pub fn topic_terms(topic: &str) -> Vec<String> {
    TopicTable::global()
        .get(topic)
        .unwrap_or_else(|| panic!("no topic {topic:?}"))
        .terms()
        .map(str::to_string)
        .collect()
}

/// Assert every record in `results` appears in `corpus`.
pub fn assert_subset_of(results: &[Hadith], corpus: &[Hadith]) {
    for hit in results {
        assert!(
            corpus.contains(hit),
            "result {} is not in the corpus it was searched from",
            hit.id
        );
    }
}

/// Number of distinct terms the expansion added beyond the query itself.
pub fn added_terms(expanded: &ExpandedQuery) -> usize {
    expanded.len() - 1
}
