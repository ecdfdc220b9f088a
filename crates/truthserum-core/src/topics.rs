//! Topic table: the static ontology of search topics and their synonyms.
//!
//! The table is built at compile time as a `phf` ordered map. Lookup by key is
//! a perfect-hash probe; iteration follows declaration order, which the
//! detector relies on for its first-match policy.
//!
//! Every key and synonym is stored lowercase so that matching only has to fold
//! the query, never the table.

use crate::error::TableError;
use phf::phf_ordered_map;
use serde::Serialize;
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Table data
// ---------------------------------------------------------------------------

static TOPICS: phf::OrderedMap<&'static str, &'static [&'static str]> = phf_ordered_map! {
    "prayer" => &[
        "salah", "salat", "namaz", "tahajjud", "fajr", "dhuhr", "asr", "maghrib",
        "isha", "witr", "rakah", "sujood", "qiyam",
    ],
    "fasting" => &["sawm", "siyam", "ramadan", "suhoor", "iftar", "fast"],
    "charity" => &["zakat", "zakah", "sadaqah", "sadaqa", "alms", "donation", "giving"],
    "washing" => &["wudu", "ablution", "ghusl", "tayammum", "purification", "purity"],
    "pilgrimage" => &["hajj", "umrah", "ihram", "tawaf", "arafat", "kaaba", "zamzam"],
    "knowledge" => &["ilm", "scholar", "learning", "teaching", "wisdom", "study"],
    "parents" => &["mother", "father", "birr", "obedience to parents", "kinship"],
    "marriage" => &[
        "nikah", "wedding", "spouse", "husband", "wife", "mahr", "divorce", "talaq",
    ],
    "death" => &["janazah", "funeral", "grave", "burial", "afterlife"],
    "paradise" => &["jannah", "heaven", "firdaws", "garden of eden"],
    "hellfire" => &["jahannam", "hell", "torment", "damnation"],
    "repentance" => &["tawbah", "tawba", "istighfar", "forgiveness", "repent"],
    "patience" => &["sabr", "perseverance", "endurance", "hardship", "trial"],
    "gratitude" => &["shukr", "thankfulness", "grateful", "thanks"],
    "supplication" => &["dua", "dhikr", "remembrance", "invocation", "adhkar"],
    "honesty" => &["truthfulness", "sidq", "truth", "liar", "lying", "deceit"],
    "neighbors" => &["neighbor", "neighbour", "jaar", "next door"],
    "mercy" => &["rahma", "rahmah", "compassion", "kindness", "gentleness"],
    "faith" => &["iman", "belief", "believer", "tawhid", "aqeedah"],
    "intention" => &["niyyah", "niyya", "sincerity", "ikhlas"],
    "trade" => &["business", "buying", "selling", "merchant", "commerce", "riba", "usury"],
    "food" => &["eating", "drinking", "halal", "haram", "meal"],
    "orphans" => &["orphan", "yateem", "yatim", "widow"],
    "jihad" => &["struggle", "striving", "battle", "martyr", "shaheed"],
    "modesty" => &["haya", "hijab", "shyness", "awrah", "chastity"],
    "anger" => &["wrath", "temper", "ghadab", "enraged"],
    "manners" => &["adab", "etiquette", "akhlaq", "character", "conduct"],
    "friday" => &["jumuah", "jummah", "jumah", "khutbah", "sermon"],
    "quran" => &["koran", "recitation", "tilawah", "surah", "ayah", "mushaf"],
    "prophets" => &["prophet", "messenger", "rasul", "nabi", "sunnah"],
    "angels" => &["angel", "jibril", "gabriel", "malaikah"],
    "judgment" => &[
        "qiyamah", "resurrection", "hereafter", "reckoning", "last day", "afterlife",
    ],
    "travel" => &["journey", "traveler", "traveller", "safar", "musafir"],
    "sickness" => &["illness", "disease", "healing", "medicine", "fever"],
    "oppression" => &["zulm", "injustice", "tyranny", "oppressor"],
};

static GLOBAL: TopicTable = TopicTable { map: &TOPICS };

// ---------------------------------------------------------------------------
// TopicEntry
// ---------------------------------------------------------------------------

/// One canonical topic and its synonym list, borrowed from the static table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopicEntry {
    /// Canonical lowercase key, e.g. `"prayer"`.
    pub topic: &'static str,
    /// Transliterations and related phrases, in declaration order.
    pub synonyms: &'static [&'static str],
}

impl TopicEntry {
    /// Whether an already-lowercased query contains this topic's key or any
    /// of its synonyms as a substring.
    ///
    /// Containment is deliberately not word-bounded: `"prayers"` matches
    /// `"prayer"`.
    pub fn matches(&self, lowered_query: &str) -> bool {
        lowered_query.contains(self.topic)
            || self.synonyms.iter().any(|s| lowered_query.contains(s))
    }

    /// The key followed by every synonym.
    pub fn terms(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.topic).chain(self.synonyms.iter().copied())
    }
}

// ---------------------------------------------------------------------------
// TopicTable
// ---------------------------------------------------------------------------

/// Read-only view over a static topic map.
#[derive(Debug, Clone, Copy)]
pub struct TopicTable {
    map: &'static phf::OrderedMap<&'static str, &'static [&'static str]>,
}

impl TopicTable {
    /// The built-in table.
    pub fn global() -> &'static TopicTable {
        &GLOBAL
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Look up an entry by its canonical key.
    pub fn get(&self, topic: &str) -> Option<TopicEntry> {
        self.map
            .get_entry(topic)
            .map(|(topic, synonyms)| TopicEntry {
                topic: *topic,
                synonyms: *synonyms,
            })
    }

    /// Declaration index of a topic key.
    pub fn position(&self, topic: &str) -> Option<usize> {
        self.map.get_index(topic)
    }

    /// All entries, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = TopicEntry> + '_ {
        self.map
            .entries()
            .map(|(topic, synonyms)| TopicEntry {
                topic: *topic,
                synonyms: *synonyms,
            })
    }

    /// All canonical keys, in declaration order.
    pub fn topics(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.map.keys().copied()
    }

    /// Check the table invariants. Meant to run once, from a test or at
    /// startup, never per query.
    pub fn validate(&self) -> Result<(), TableError> {
        validate_entries(self.iter())
    }
}

/// Validate an arbitrary sequence of entries against the table invariants:
/// keys are lowercase, trimmed, non-empty and unique; synonym lists are
/// non-empty; every synonym is lowercase, trimmed and non-empty.
pub fn validate_entries<I>(entries: I) -> Result<(), TableError>
where
    I: IntoIterator<Item = TopicEntry>,
{
    let mut seen = HashSet::new();
    for entry in entries {
        if !is_normalized(entry.topic) {
            return Err(TableError::MalformedKey(entry.topic.to_string()));
        }
        if !seen.insert(entry.topic) {
            return Err(TableError::DuplicateKey(entry.topic.to_string()));
        }
        if entry.synonyms.is_empty() {
            return Err(TableError::EmptySynonyms(entry.topic.to_string()));
        }
        if let Some(bad) = entry.synonyms.iter().find(|s| !is_normalized(s)) {
            return Err(TableError::MalformedSynonym {
                topic: entry.topic.to_string(),
                synonym: bad.to_string(),
            });
        }
    }
    Ok(())
}

fn is_normalized(s: &str) -> bool {
    !s.is_empty() && s.trim() == s && s.to_lowercase() == s
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
