//! Fixture inputs as authored in scenario tables.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One row of a step's input table: named columns mapped to literal values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureRow {
    pub columns: BTreeMap<String, String>,
}

impl FixtureRow {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            columns: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns.get(column).map(String::as_str)
    }
}

/// A record-creation request, parsed from a fixture row with the author
/// reference already resolved to a numeric id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    /// Passed through verbatim; the store applies its own default when empty.
    pub status: String,
    /// Empty means the store's primary content type.
    pub post_type: String,
    pub author: Option<u64>,
    pub date: Option<String>,
    /// Unrecognized columns, carried verbatim to the store.
    pub extra: BTreeMap<String, String>,
}

/// A (key, value) metadata pair. Keys are multi-valued: adding the same key
/// twice with different values keeps both.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaEntry {
    pub key: String,
    pub value: String,
}

impl MetaEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
