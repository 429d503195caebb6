//! Free-text and facet filtering over a record store.

use std::collections::BTreeMap;

use crate::models::Record;

/// Sentinel facet value meaning "no constraint on this facet".
pub const FACET_ALL: &str = "all";

/// A filter query: one free-text search term plus zero or more
/// facet-equality constraints. Facets set to [`FACET_ALL`] or the empty
/// string are ignored at match time.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub search: String,
    pub facets: BTreeMap<String, String>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn facet(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.facets.insert(name.into(), value.into());
        self
    }
}

/// Apply a query to a record slice, returning the matching subset in
/// store order. Pure: same inputs, same output, no side effects.
///
/// A record matches the search term when any of its searchable fields
/// contains the term case-insensitively; missing fields are empty strings
/// and therefore never match a non-empty term. The search predicate and
/// all active facet predicates compose with logical AND.
pub fn filter<'a, R: Record>(records: &'a [R], query: &Query) -> Vec<&'a R> {
    let term = query.search.trim().to_lowercase();
    records
        .iter()
        .filter(|record| matches(*record, &term, &query.facets))
        .collect()
}

fn matches<R: Record>(record: &R, term: &str, facets: &BTreeMap<String, String>) -> bool {
    if !term.is_empty() {
        let hit = record
            .searchable()
            .iter()
            .any(|field| field.to_lowercase().contains(term));
        if !hit {
            return false;
        }
    }
    for (name, value) in facets {
        if value == FACET_ALL || value.is_empty() {
            continue;
        }
        if record.facet(name).unwrap_or_default() != *value {
            return false;
        }
    }
    true
}
