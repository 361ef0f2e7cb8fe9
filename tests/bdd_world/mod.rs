#![cfg_attr(
    not(feature = "bdd"),
    allow(unused_imports, unused_variables, dead_code)
)]

use serde_json::Value;

use copydesk::adapters::{MemoryStore, ScriptedBrowser};
use copydesk::api::errors::ApiError;
use copydesk::api::{ApiBuilder, Copydesk, OpenedPage, Profile};

use crate::bdd_support::{CollectingAudit, CollectingEmitter};

#[derive(Default, cucumber::World)]
pub struct World {
    pub(crate) api: Option<Copydesk<CollectingEmitter, CollectingAudit>>,
    pub(crate) store: MemoryStore,
    pub(crate) browser: ScriptedBrowser,
    pub(crate) facts: CollectingEmitter,
    pub(crate) audit: CollectingAudit,
    pub(crate) last_error: Option<ApiError>,
    pub(crate) opened: Option<OpenedPage>,
}

impl World {
    pub fn rebuild_api(&mut self) {
        let api = ApiBuilder::new(
            self.facts.clone(),
            self.audit.clone(),
            Box::new(self.store.clone()),
            Box::new(self.store.clone()),
        )
        .with_browser(Box::new(self.browser.clone()))
        .build();
        self.api = Some(api);
    }

    pub fn ensure_api(&mut self) {
        if self.api.is_none() {
            self.rebuild_api();
        }
    }

    pub fn api(&mut self) -> &Copydesk<CollectingEmitter, CollectingAudit> {
        self.ensure_api();
        self.api.as_ref().unwrap()
    }

    /// Record an operation outcome; negative-path steps assert on the
    /// captured error afterwards.
    pub fn capture(&mut self, result: Result<(), ApiError>) {
        self.last_error = result.err();
    }

    /// URL the edit screen for post `id` will open at, per the profile.
    pub fn edit_url(&self, id: u64) -> String {
        let profile = Profile::default();
        format!(
            "{}{}",
            profile.admin_root,
            profile.edit_path.replace("{id}", &id.to_string())
        )
    }

    /// Snapshot all emitted facts so far.
    pub fn all_facts(&self) -> Vec<Value> {
        self.facts.0.lock().unwrap().clone()
    }
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("api", &self.api.as_ref().map(|_| "Copydesk{..}"))
            .field("last_error", &self.last_error)
            .field("opened", &self.opened)
            .finish()
    }
}
