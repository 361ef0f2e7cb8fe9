//! Data-only types describing what the content store holds.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric identifier assigned to a record by the content store.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A content record as read back from the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: PostId,
    pub post_type: String,
    pub title: String,
    pub status: String,
    /// Numeric author identifier, when the record carries one.
    pub author: Option<u64>,
}

/// A user account, looked up by login name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub login: String,
}

/// A taxonomy term resolved to its stable slug.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRecord {
    pub taxonomy: String,
    pub name: String,
    pub slug: String,
}

/// A (post type, display title) pair used in step text in place of an id.
/// Resolution must be unique and fails loudly when no record matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityRef {
    pub post_type: String,
    pub title: String,
}

impl EntityRef {
    pub fn new(post_type: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            post_type: post_type.into(),
            title: title.into(),
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \"{}\"", self.post_type, self.title)
    }
}
