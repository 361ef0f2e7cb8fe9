//! In-memory reference store backing the test suite and scripted runs.
//!
//! Cloning a `MemoryStore` yields a handle onto the same shared state, so a
//! scenario World and the API facade can observe each other's writes.
//!
//! Meta reads are served through an explicit per-record cache: the first
//! read snapshots the record's meta rows and later reads reuse the snapshot
//! until `invalidate` drops it. This mirrors the object cache of the CMS the
//! trait abstracts, and makes stale-read bugs observable in tests.
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{ContentStore, TypeLabels};
use crate::constants::{DEFAULT_POST_STATUS, DEFAULT_POST_TYPE};
use crate::types::errors::Result;
use crate::types::{NewPost, PostId, PostRecord, TermRecord, UserRecord};

#[derive(Default)]
struct Inner {
    next_id: u64,
    posts: BTreeMap<u64, PostRecord>,
    users: BTreeMap<String, UserRecord>,
    /// Terms keyed by (taxonomy, display name).
    terms: BTreeMap<(String, String), TermRecord>,
    /// Replacing term assignments keyed by (post id, taxonomy), as slugs.
    object_terms: BTreeMap<(u64, String), Vec<String>>,
    /// Meta rows in insertion order; keys are multi-valued.
    meta: BTreeMap<u64, Vec<(String, String)>>,
    /// Snapshot served to readers until invalidated.
    meta_cache: BTreeMap<u64, Vec<(String, String)>>,
    /// Registered post types: type name to "edit item" label.
    labels: BTreeMap<String, String>,
}

#[derive(Clone, Default)]
pub struct MemoryStore(Arc<Mutex<Inner>>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.0.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Seed a user account.
    pub fn add_user(&self, id: u64, login: &str) {
        self.lock().users.insert(
            login.to_string(),
            UserRecord {
                id,
                login: login.to_string(),
            },
        );
    }

    /// Seed a term under `taxonomy`.
    pub fn add_term(&self, taxonomy: &str, name: &str, slug: &str) {
        self.lock().terms.insert(
            (taxonomy.to_string(), name.to_string()),
            TermRecord {
                taxonomy: taxonomy.to_string(),
                name: name.to_string(),
                slug: slug.to_string(),
            },
        );
    }

    /// Register a post type with the label shown on its admin edit screen.
    pub fn register_type(&self, post_type: &str, edit_label: &str) {
        self.lock()
            .labels
            .insert(post_type.to_string(), edit_label.to_string());
    }
}

impl ContentStore for MemoryStore {
    fn insert_post(&self, post: NewPost) -> Result<PostId> {
        let mut inner = self.lock();
        inner.next_id += 1;
        let id = inner.next_id;
        let record = PostRecord {
            id: PostId(id),
            post_type: if post.post_type.is_empty() {
                DEFAULT_POST_TYPE.to_string()
            } else {
                post.post_type
            },
            title: post.title,
            status: if post.status.is_empty() {
                DEFAULT_POST_STATUS.to_string()
            } else {
                post.status
            },
            author: post.author,
        };
        inner.posts.insert(id, record);
        Ok(PostId(id))
    }

    fn post_by_title(&self, post_type: &str, title: &str) -> Result<Option<PostRecord>> {
        let inner = self.lock();
        Ok(inner
            .posts
            .values()
            .find(|p| p.post_type == post_type && p.title == title)
            .cloned())
    }

    fn user_by_login(&self, login: &str) -> Result<Option<UserRecord>> {
        Ok(self.lock().users.get(login).cloned())
    }

    fn term_by_name(&self, taxonomy: &str, name: &str) -> Result<Option<TermRecord>> {
        Ok(self
            .lock()
            .terms
            .get(&(taxonomy.to_string(), name.to_string()))
            .cloned())
    }

    fn set_object_terms(&self, post: PostId, taxonomy: &str, slugs: &[String]) -> Result<()> {
        self.lock()
            .object_terms
            .insert((post.0, taxonomy.to_string()), slugs.to_vec());
        Ok(())
    }

    fn object_terms(&self, post: PostId, taxonomy: &str) -> Result<Vec<TermRecord>> {
        let inner = self.lock();
        let slugs = inner
            .object_terms
            .get(&(post.0, taxonomy.to_string()))
            .cloned()
            .unwrap_or_default();
        Ok(slugs
            .iter()
            .filter_map(|slug| {
                inner
                    .terms
                    .values()
                    .find(|t| t.taxonomy == taxonomy && &t.slug == slug)
                    .cloned()
            })
            .collect())
    }

    fn add_meta(&self, post: PostId, key: &str, value: &str) -> Result<()> {
        // Writes bypass the read cache on purpose; readers stay stale until
        // they invalidate.
        self.lock()
            .meta
            .entry(post.0)
            .or_default()
            .push((key.to_string(), value.to_string()));
        Ok(())
    }

    fn meta_values(&self, post: PostId, key: &str) -> Result<Vec<String>> {
        let mut inner = self.lock();
        if !inner.meta_cache.contains_key(&post.0) {
            let rows = inner.meta.get(&post.0).cloned().unwrap_or_default();
            inner.meta_cache.insert(post.0, rows);
        }
        Ok(inner.meta_cache[&post.0]
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .collect())
    }

    fn invalidate(&self, post: PostId) {
        self.lock().meta_cache.remove(&post.0);
    }
}

impl TypeLabels for MemoryStore {
    fn edit_label(&self, post_type: &str) -> Option<String> {
        self.lock().labels.get(post_type).cloned()
    }
}
