//! Core types for truthserum-core.
//!
//! This module defines the record shape of the searchable corpus, the
//! [`Hadith`], and the [`SearchField`] discriminant naming which of its text
//! columns a substring clause applies to.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One hadith as stored in the hosted text store (and in local JSONL dumps of it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hadith {
    /// Primary key in the hosted store.
    pub id: u64,
    /// Collection slug, e.g. `"bukhari"`.
    pub collection: String,
    /// Reference number within the collection. Kept as text because some
    /// collections use suffixed numbers such as `"1020a"`.
    pub number: String,
    /// Narrator chain summary, if the source has one.
    #[serde(default)]
    pub narrator: Option<String>,
    /// English translation.
    pub english: String,
    /// Original Arabic text.
    #[serde(default)]
    pub arabic: Option<String>,
}

impl Hadith {
    /// The text of `field`, or `None` when the record lacks it.
    pub fn field(&self, field: SearchField) -> Option<&str> {
        match field {
            SearchField::English => Some(self.english.as_str()),
            SearchField::Arabic => self.arabic.as_deref(),
            SearchField::Narrator => self.narrator.as_deref(),
        }
    }
}

/// A searchable text column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    English,
    Arabic,
    Narrator,
}

impl SearchField {
    pub const ALL: [SearchField; 3] = [SearchField::English, SearchField::Arabic, SearchField::Narrator];

    /// Column name in the hosted store.
    pub fn column(self) -> &'static str {
        match self {
            SearchField::English => "text_en",
            SearchField::Arabic => "text_ar",
            SearchField::Narrator => "narrator",
        }
    }
}

impl std::fmt::Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchField::English => write!(f, "english"),
            SearchField::Arabic => write!(f, "arabic"),
            SearchField::Narrator => write!(f, "narrator"),
        }
    }
}

impl FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "text_en" => Ok(SearchField::English),
            "arabic" | "text_ar" => Ok(SearchField::Arabic),
            "narrator" => Ok(SearchField::Narrator),
            other => Err(format!("unknown search field: {other}")),
        }
    }
}
