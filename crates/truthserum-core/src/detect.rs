//! Topic detection: a single-label classification of a raw query.
//!
//! Uses the same substring rule as expansion but stops at the first matching
//! topic in declaration order. A query that touches two topics is labelled
//! with whichever is declared earlier; the other is not reported.

use crate::topics::TopicTable;

impl TopicTable {
    /// The first topic, in declaration order, matched by `query`.
    pub fn detect(&self, query: &str) -> Option<&'static str> {
        let lowered = query.to_lowercase();
        let topic = self.iter().find(|e| e.matches(&lowered)).map(|e| e.topic);
        tracing::debug!(query = %query, topic = ?topic, "detect: topic classified");
        topic
    }
}

/// Detect the topic of `query` against the built-in table.
pub fn detect_topic(query: &str) -> Option<&'static str> {
    TopicTable::global().detect(query)
}
