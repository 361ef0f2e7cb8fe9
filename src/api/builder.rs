use crate::adapters::{BrowserDriver, ContentStore, TypeLabels};
use crate::logging::{AuditSink, FactsEmitter};

use super::Profile;

/// Builder for constructing a Copydesk with ergonomic chaining.
/// Mirrors `Copydesk::new(...).with_*` but avoids duplication at call sites.
pub struct ApiBuilder<E: FactsEmitter, A: AuditSink> {
    facts: E,
    audit: A,
    store: Box<dyn ContentStore>,
    labels: Box<dyn TypeLabels>,
    browser: Option<Box<dyn BrowserDriver>>,
    profile: Profile,
}

impl<E: FactsEmitter, A: AuditSink> ApiBuilder<E, A> {
    pub fn new(
        facts: E,
        audit: A,
        store: Box<dyn ContentStore>,
        labels: Box<dyn TypeLabels>,
    ) -> Self {
        Self {
            facts,
            audit,
            store,
            labels,
            browser: None,
            profile: Profile::default(),
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

    pub fn build(self) -> super::Copydesk<E, A> {
        let mut api = super::Copydesk::new(self.facts, self.audit, self.store, self.labels)
            .with_profile(self.profile);
        if let Some(browser) = self.browser {
            api = api.with_browser(browser);
        }
        api
    }
}
