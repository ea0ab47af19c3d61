//! Records served by the phones endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Record identifier. The endpoint has served both numeric and string ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Number(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

impl RecordId {
    /// Parse user input (e.g. a CLI argument) into an id.
    ///
    /// Anything that looks like an integer becomes `Number`.
    pub fn parse(raw: &str) -> Self {
        raw.parse::<i64>()
            .map(RecordId::Number)
            .unwrap_or_else(|_| RecordId::Text(raw.to_string()))
    }
}

/// Display position served next to each record.
///
/// Only ever rendered, so any JSON scalar the endpoint sends is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordIndex {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

impl fmt::Display for RecordIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordIndex::Number(n) => write!(f, "{}", n),
            RecordIndex::Text(s) => f.write_str(s),
            RecordIndex::Other(value) => write!(f, "{}", value),
        }
    }
}

impl From<i64> for RecordIndex {
    fn from(n: i64) -> Self {
        RecordIndex::Number(n)
    }
}

impl From<&str> for RecordIndex {
    fn from(s: &str) -> Self {
        RecordIndex::Text(s.to_string())
    }
}

/// One entry of the list. Immutable once fetched; identity is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<RecordIndex>,
}

impl Record {
    pub fn new(id: impl Into<RecordId>, name: &str, phone: &str) -> Self {
        Self {
            id: id.into(),
            name: name.to_string(),
            phone: phone.to_string(),
            index: None,
        }
    }

    pub fn with_index(mut self, index: impl Into<RecordIndex>) -> Self {
        self.index = Some(index.into());
        self
    }

    /// Case-insensitive substring match on the phone field.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn phone_contains(&self, needle: &str) -> bool {
        needle.is_empty() || self.phone.to_lowercase().contains(needle)
    }

    /// JSON form handed to the detail view alongside the typed record.
    pub fn raw_payload(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Ordered records from the last successful fetch.
pub type Dataset = Vec<Record>;
