//! Corpus loading: JSONL dumps of the hosted hadith table, one record per line.

use crate::error::SearchError;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};
use truthserum_core::Hadith;

/// Read every record from a JSONL file.
pub fn load_jsonl(path: &Path) -> Result<Vec<Hadith>, SearchError> {
    let file = File::open(path)?;
    let corpus = parse_jsonl(BufReader::new(file))?;
    tracing::info!(path = %path.display(), records = corpus.len(), "corpus loaded");
    Ok(corpus)
}

/// Parse JSONL from any buffered reader. Blank lines are skipped; the first
/// malformed line aborts with its 1-based line number.
pub fn parse_jsonl<R: BufRead>(reader: R) -> Result<Vec<Hadith>, SearchError> {
    let mut corpus = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let hadith = serde_json::from_str(&line)
            .map_err(|source| SearchError::Parse { line: idx + 1, source })?;
        corpus.push(hadith);
    }
    Ok(corpus)
}
