// Facade for API module; delegates to submodules under src/api/

use serde::{Deserialize, Serialize};

use crate::adapters::{BrowserDriver, ContentStore, TypeLabels};
use crate::constants::{DEFAULT_ADMIN_ROOT, DEFAULT_POST_TYPE, EDIT_PATH_TEMPLATE};
use crate::logging::{AuditSink, FactsEmitter};
use crate::types::{FixtureRow, MetaEntry};

mod assert;
mod builder;
pub mod errors;
mod fixtures;
mod mutate;
mod page;
mod resolve;

pub use builder::ApiBuilder;
pub use page::{EditPage, OpenedPage};
pub use resolve::Resolver;

/// Site profile: where the admin screens live and which post type steps
/// default to when not given one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub admin_root: String,
    pub edit_path: String,
    pub default_post_type: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            admin_root: DEFAULT_ADMIN_ROOT.to_string(),
            edit_path: EDIT_PATH_TEMPLATE.to_string(),
            default_post_type: DEFAULT_POST_TYPE.to_string(),
        }
    }
}

pub struct Copydesk<E: FactsEmitter, A: AuditSink> {
    facts: E,
    audit: A,
    profile: Profile,
    store: Box<dyn ContentStore>,
    labels: Box<dyn TypeLabels>,
    browser: Option<Box<dyn BrowserDriver>>, // None when scenarios never open admin screens
}

impl<E: FactsEmitter, A: AuditSink> Copydesk<E, A> {
    pub fn new(
        facts: E,
        audit: A,
        store: Box<dyn ContentStore>,
        labels: Box<dyn TypeLabels>,
    ) -> Self {
        Self {
            facts,
            audit,
            profile: Profile::default(),
            store,
            labels,
            browser: None,
        }
    }

    pub fn with_browser(mut self, browser: Box<dyn BrowserDriver>) -> Self {
        self.browser = Some(browser);
        self
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    /// Lookup helper over the configured store.
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(self.store.as_ref())
    }

    /// Create one record per fixture row. Author references are resolved for
    /// the whole table before any insert, so a bad login creates nothing.
    pub fn insert_posts(&self, rows: &[FixtureRow]) -> Result<(), errors::ApiError> {
        fixtures::insert(self, rows)
    }

    /// Resolve the record by title and replace its term set under `taxonomy`
    /// with the comma-separated `terms`, failing if any named term is absent.
    pub fn assign_terms(
        &self,
        post_type: &str,
        title: &str,
        taxonomy: &str,
        terms: &str,
    ) -> Result<(), errors::ApiError> {
        mutate::assign_terms(self, post_type, title, taxonomy, terms)
    }

    /// Resolve the record by title and add each entry as a new metadata row
    /// (additive; keys are multi-valued).
    pub fn add_meta(
        &self,
        post_type: &str,
        title: &str,
        entries: &[MetaEntry],
    ) -> Result<(), errors::ApiError> {
        mutate::add_meta(self, post_type, title, entries)
    }

    /// Assert the record's term set under `taxonomy` equals the expected
    /// comma-separated list (order-insensitive).
    pub fn assert_terms(
        &self,
        post_type: &str,
        title: &str,
        taxonomy: &str,
        expected: &str,
    ) -> Result<(), errors::ApiError> {
        assert::terms(self, post_type, title, taxonomy, expected)
    }

    /// Assert the record's status equals `expected`.
    pub fn assert_status(
        &self,
        post_type: &str,
        title: &str,
        expected: &str,
    ) -> Result<(), errors::ApiError> {
        assert::status(self, post_type, title, expected)
    }

    /// Assert the values stored under `key` include `value`. The record's
    /// read cache is invalidated first so the latest write is observed.
    pub fn assert_meta_value(
        &self,
        post_type: &str,
        title: &str,
        key: &str,
        value: &str,
    ) -> Result<(), errors::ApiError> {
        assert::meta_value(self, post_type, title, key, value, true)
    }

    /// Inverse of [`assert_meta_value`](Self::assert_meta_value).
    pub fn assert_not_meta_value(
        &self,
        post_type: &str,
        title: &str,
        key: &str,
        value: &str,
    ) -> Result<(), errors::ApiError> {
        assert::meta_value(self, post_type, title, key, value, false)
    }

    /// Resolve the record by title and open its admin edit screen, verifying
    /// response, URL, and page heading.
    pub fn open_edit_screen(
        &self,
        post_type: &str,
        title: &str,
    ) -> Result<OpenedPage, errors::ApiError> {
        page::open_edit_screen(self, post_type, title)
    }

    pub(crate) fn facts(&self) -> &E {
        &self.facts
    }

    pub(crate) fn audit(&self) -> &A {
        &self.audit
    }

    pub(crate) fn store(&self) -> &dyn ContentStore {
        self.store.as_ref()
    }

    pub(crate) fn labels(&self) -> &dyn TypeLabels {
        self.labels.as_ref()
    }

    pub(crate) fn browser(&self) -> Option<&dyn BrowserDriver> {
        self.browser.as_deref()
    }

    pub(crate) fn profile(&self) -> &Profile {
        &self.profile
    }
}
