//! Static corpora and query sets used across harnesses.

use crate::common::builders::HadithBuilder;
use truthserum_core::Hadith;

/// Queries from the search screen that each hit exactly one topic.
pub const SINGLE_TOPIC_QUERIES: &[(&str, &str)] = &[
    ("I want to learn about salah", "prayer"),
    ("zakat and sadaqah", "charity"),
    ("ramadan", "fasting"),
    ("ghusl", "washing"),
    ("tawaf around the kaaba", "pilgrimage"),
    ("nikah", "marriage"),
    ("janazah", "death"),
    ("istighfar", "repentance"),
    ("jibril", "angels"),
    ("musafir", "travel"),
];

/// Queries that should never match any topic.
pub const NO_TOPIC_QUERIES: &[&str] = &["", "   ", "xyz", "12345", "qqq zzz"];

/// A small corpus covering several topics, one record per line of interest.
///
/// | id | hits |
/// |----|------|
/// | 1 | prayer (`salah`) |
/// | 2 | prayer (`tahajjud`) |
/// | 3 | charity (`zakat`) |
/// | 4 | charity (`sadaqah`) |
/// | 5 | washing (`wudu`), narrator `Abu Hurairah` |
/// | 6 | fasting (`ramadan`) |
/// | 7 | nothing |
pub fn fixture_corpus() -> Vec<Hadith> {
    vec![
        HadithBuilder::new(1, "The first matter to be judged is the salah")
            .narrator("Abu Hurairah")
            .build(),
        HadithBuilder::new(2, "He used to stand at night for tahajjud until his feet swelled")
            .narrator("Aishah")
            .build(),
        HadithBuilder::new(3, "Islam is built upon five, among them giving zakat")
            .collection("muslim")
            .narrator("Ibn Umar")
            .build(),
        HadithBuilder::new(4, "Every act of kindness is sadaqah")
            .collection("muslim")
            .build(),
        HadithBuilder::new(5, "Whoever performs wudu well, his sins leave his body")
            .narrator("Abu Hurairah")
            .build(),
        HadithBuilder::new(6, "Whoever fasts ramadan out of faith and hope of reward")
            .build(),
        HadithBuilder::new(7, "The strong one is not the one who overcomes people by wrestling")
            .build(),
    ]
}
