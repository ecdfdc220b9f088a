//! Substring predicates: the OR of `(field, term)` clauses a search request
//! compiles down to, and its rendering as a PostgREST `or=` filter.

use serde::Serialize;
use truthserum_core::{Hadith, SearchField};

/// Characters PostgREST treats as syntax inside an `or=(...)` list. A value
/// containing any of them must be double-quoted.
const RESERVED: &[char] = &[',', '.', ':', '(', ')', '"', '\\'];

// ---------------------------------------------------------------------------
// Clause
// ---------------------------------------------------------------------------

/// Case-insensitive "`field` contains `term`".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clause {
    pub field: SearchField,
    pub term: String,
    #[serde(skip)]
    needle: String,
}

impl Clause {
    /// A `*` in `term` is dropped here exactly as it is in the rendered
    /// filter, so local evaluation and the hosted store agree.
    pub fn new(field: SearchField, term: impl Into<String>) -> Self {
        let term = term.into();
        let needle = term.replace('*', "").to_lowercase();
        Self { field, term, needle }
    }

    /// Whether anything is left to match once `*` is dropped. A clause
    /// without a literal would match every row.
    pub fn has_literal(&self) -> bool {
        !self.needle.is_empty()
    }

    /// Test against text that has already been lowercased. A clause with no
    /// literal never matches.
    pub fn matches_lowered(&self, lowered_text: &str) -> bool {
        self.has_literal() && lowered_text.contains(&self.needle)
    }

    /// `column.ilike.*term*`, quoted when the term contains reserved syntax.
    pub fn to_postgrest(&self) -> String {
        format!("{}.ilike.{}", self.field.column(), postgrest_pattern(&self.term))
    }
}

// ---------------------------------------------------------------------------
// Predicate
// ---------------------------------------------------------------------------

/// A disjunction of [`Clause`]s. A record matches when any clause does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Predicate {
    clauses: Vec<Clause>,
}

impl Predicate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Evaluate against a record, lowercasing field text on demand.
    pub fn matches(&self, hadith: &Hadith) -> bool {
        self.matches_by(|field| hadith.field(field).map(str::to_lowercase))
    }

    /// Evaluate with a caller-supplied accessor returning lowercased text per
    /// field. Stores that keep a pre-folded copy of their rows use this to
    /// avoid folding on every query.
    pub fn matches_by<F, S>(&self, mut lowered: F) -> bool
    where
        F: FnMut(SearchField) -> Option<S>,
        S: AsRef<str>,
    {
        self.clauses.iter().any(|clause| {
            lowered(clause.field).is_some_and(|text| clause.matches_lowered(text.as_ref()))
        })
    }

    /// Render as the query parameter the hosted store's REST layer expects:
    /// `or=(text_en.ilike.*salah*,narrator.ilike.*salah*)`. Clauses without a
    /// literal are left out rather than rendered as a bare `**`.
    pub fn to_postgrest(&self) -> String {
        let clauses: Vec<String> = self
            .clauses
            .iter()
            .filter(|c| c.has_literal())
            .map(Clause::to_postgrest)
            .collect();
        format!("or=({})", clauses.join(","))
    }
}

impl FromIterator<Clause> for Predicate {
    fn from_iter<I: IntoIterator<Item = Clause>>(iter: I) -> Self {
        Self { clauses: iter.into_iter().collect() }
    }
}

// ---------------------------------------------------------------------------
// Escaping
// ---------------------------------------------------------------------------

/// `*term*` with LIKE metacharacters escaped. A literal `*` cannot be
/// expressed (PostgREST rewrites every `*` to `%`), so it is dropped.
fn postgrest_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('*');
    for ch in term.chars() {
        match ch {
            '*' => {}
            '%' | '_' | '\\' => {
                pattern.push('\\');
                pattern.push(ch);
            }
            _ => pattern.push(ch),
        }
    }
    pattern.push('*');

    if pattern.contains(RESERVED) {
        format!("\"{}\"", pattern.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        pattern
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
