//! Local search over the fetched list.
//!
//! The engine keeps the fetched dataset untouched and derives the displayed
//! subset from it on every query change. Filtering never runs over the
//! previously displayed subset, so clearing a query always restores the
//! full list.

use crate::model::{Dataset, Record};

/// Source dataset, displayed subset and the query that produced it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    source: Dataset,
    displayed: Dataset,
    query: String,
}

impl FilterState {
    /// Replace the dataset wholesale and clear the query.
    pub fn seed(&mut self, dataset: Dataset) {
        self.displayed = dataset.clone();
        self.source = dataset;
        self.query.clear();
    }

    /// Store `text` verbatim and recompute the displayed subset from source.
    pub fn set_query(&mut self, text: &str) {
        self.query = text.to_string();
        if text.is_empty() {
            self.displayed = self.source.clone();
            return;
        }
        let needle = text.to_lowercase();
        self.displayed = self
            .source
            .iter()
            .filter(|r| r.phone_contains(&needle))
            .cloned()
            .collect();
    }

    pub fn clear_query(&mut self) {
        self.set_query("");
    }

    /// Drop both datasets and the query.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn source(&self) -> &[Record] {
        &self.source
    }

    pub fn displayed(&self) -> &[Record] {
        &self.displayed
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn result_count(&self) -> usize {
        self.displayed.len()
    }
}
