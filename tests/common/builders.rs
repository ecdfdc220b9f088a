//! Test builders: ergonomic constructors for `Hadith` records and corpus files.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use std::io::Write;
use truthserum_core::Hadith;

// ---------------------------------------------------------------------------
// HadithBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Hadith`] test fixtures.
///
/// # Example
///
/// ```rust
/// let hadith = HadithBuilder::new(7, "Pray as you have seen me praying")
///     .collection("bukhari")
///     .narrator("Malik ibn al-Huwairith")
///     .build();
/// ```
pub struct HadithBuilder {
    id: u64,
    collection: String,
    number: String,
    narrator: Option<String>,
    english: String,
    arabic: Option<String>,
}

impl HadithBuilder {
    pub fn new(id: u64, english: impl Into<String>) -> Self {
        Self {
            id,
            collection: "bukhari".to_string(),
            number: id.to_string(),
            narrator: None,
            english: english.into(),
            arabic: None,
        }
    }

    pub fn collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    pub fn narrator(mut self, narrator: impl Into<String>) -> Self {
        self.narrator = Some(narrator.into());
        self
    }

    pub fn arabic(mut self, arabic: impl Into<String>) -> Self {
        self.arabic = Some(arabic.into());
        self
    }

    pub fn build(self) -> Hadith {
        Hadith {
            id: self.id,
            collection: self.collection,
            number: self.number,
            narrator: self.narrator,
            english: self.english,
            arabic: self.arabic,
        }
    }
}

// ---------------------------------------------------------------------------
// Corpus helpers
// ---------------------------------------------------------------------------

/// Write `corpus` as JSONL to a temp file that lives as long as the handle.
pub fn write_corpus_file(corpus: &[Hadith]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp corpus");
    for hadith in corpus {
        serde_json::to_writer(&mut file, hadith).expect("serialize hadith");
        writeln!(file).expect("write newline");
    }
    file.flush().expect("flush corpus");
    file
}

/// Build `n` filler records that match no topic, for padding stores.
pub fn filler_corpus(n: usize) -> Vec<Hadith> {
    (0..n)
        .map(|i| HadithBuilder::new(10_000 + i as u64, format!("record {i}")).build())
        .collect()
}
