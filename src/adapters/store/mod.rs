//! Content-store seam: the CMS surface the acceptance layer drives.
//!
//! Step definitions never touch a live CMS directly; they depend on this
//! trait so a scenario can run against a real installation or against the
//! in-memory reference store.
use crate::types::errors::Result;
use crate::types::{NewPost, PostId, PostRecord, TermRecord, UserRecord};

pub mod memory;

pub use memory::MemoryStore;

pub trait ContentStore: Send + Sync {
    /// Insert a record and return the id assigned by the store.
    fn insert_post(&self, post: NewPost) -> Result<PostId>;

    /// Look up a record of `post_type` by its display title.
    fn post_by_title(&self, post_type: &str, title: &str) -> Result<Option<PostRecord>>;

    /// Look up a user account by login name.
    fn user_by_login(&self, login: &str) -> Result<Option<UserRecord>>;

    /// Look up a term by display name within `taxonomy`.
    fn term_by_name(&self, taxonomy: &str, name: &str) -> Result<Option<TermRecord>>;

    /// Replace the record's term set under `taxonomy` with `slugs`
    /// (non-appending).
    fn set_object_terms(&self, post: PostId, taxonomy: &str, slugs: &[String]) -> Result<()>;

    /// Current term set of the record under `taxonomy`.
    fn object_terms(&self, post: PostId, taxonomy: &str) -> Result<Vec<TermRecord>>;

    /// Add a metadata entry. Keys are multi-valued; existing entries for the
    /// same key are kept.
    fn add_meta(&self, post: PostId, key: &str, value: &str) -> Result<()>;

    /// All values stored under `key`, served through the store's read cache.
    fn meta_values(&self, post: PostId, key: &str) -> Result<Vec<String>>;

    /// Drop any cached reads for the record so the next read is fresh.
    fn invalidate(&self, post: PostId);
}

pub trait TypeLabels: Send + Sync {
    /// Localized "edit item" heading shown on the type's admin edit screen,
    /// or `None` when the type is not registered.
    fn edit_label(&self, post_type: &str) -> Option<String>;
}
