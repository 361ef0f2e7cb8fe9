//! Lookup helpers shared by the mutation and assertion layers.
//!
//! Step text refers to records by display title, users by login, and terms
//! by name; every resolution here fails loudly when nothing matches, which
//! aborts the scenario before any mutation or comparison runs.
use crate::adapters::ContentStore;
use crate::types::errors::{Error, ErrorKind, Result};
use crate::types::{EntityRef, PostRecord, UserRecord};

pub struct Resolver<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> Resolver<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    /// Look up the record an entity reference points at.
    pub fn post(&self, entity: &EntityRef) -> Result<PostRecord> {
        match self
            .store
            .post_by_title(&entity.post_type, &entity.title)?
        {
            Some(post) => Ok(post),
            None => Err(Error {
                kind: ErrorKind::NotFound,
                msg: format!("{entity} not found"),
            }),
        }
    }

    /// Look up a user account by login name.
    pub fn user_by_login(&self, login: &str) -> Result<UserRecord> {
        match self.store.user_by_login(login)? {
            Some(user) => Ok(user),
            None => Err(Error {
                kind: ErrorKind::NotFound,
                msg: format!("user \"{login}\" not found"),
            }),
        }
    }

    /// Resolve a term name to its slug within `taxonomy`.
    pub fn term_slug(&self, taxonomy: &str, name: &str) -> Result<String> {
        match self.store.term_by_name(taxonomy, name)? {
            Some(term) => Ok(term.slug),
            None => Err(Error {
                kind: ErrorKind::NotFound,
                msg: format!("could not find \"{taxonomy}\" term {name}"),
            }),
        }
    }
}
