//! Admin edit-screen page object.
//!
//! `EditPage` is the unopened screen; `open` substitutes parameters into the
//! path template, navigates, then verifies response, URL, and page heading
//! in that order. Each check is a hard precondition; the first failure
//! aborts with a navigation error. Success yields an [`OpenedPage`].
use log::Level;
use serde_json::json;

use super::errors::{failure_fields, ApiError};
use super::{Copydesk, Profile};
use crate::adapters::{BrowserDriver, TypeLabels};
use crate::logging::audit::AuditCtx;
use crate::logging::{now_iso, AuditSink, FactsEmitter, StageLogger};
use crate::types::{ids, EntityRef};

pub struct EditPage<'a> {
    driver: &'a dyn BrowserDriver,
    labels: &'a dyn TypeLabels,
    profile: &'a Profile,
}

/// Proof that an edit screen was opened and passed all three verifications.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenedPage {
    pub url: String,
}

impl<'a> EditPage<'a> {
    pub fn new(
        driver: &'a dyn BrowserDriver,
        labels: &'a dyn TypeLabels,
        profile: &'a Profile,
    ) -> Self {
        Self {
            driver,
            labels,
            profile,
        }
    }

    /// Substitute `params` into the path template under the admin root.
    /// A pair `("id", "3")` replaces every `{id}` in the template.
    pub fn url(&self, params: &[(&str, &str)]) -> String {
        let mut path = self.profile.edit_path.clone();
        for (key, value) in params {
            path = path.replace(&format!("{{{key}}}"), value);
        }
        format!("{}{}", self.profile.admin_root, path)
    }

    pub fn open(
        &self,
        params: &[(&str, &str)],
        post_type: Option<&str>,
    ) -> Result<OpenedPage, ApiError> {
        let url = self.url(params);
        self.driver.visit(&url)?;
        self.verify_response()?;
        self.verify_url(&url)?;
        self.verify_page(post_type)?;
        Ok(OpenedPage { url })
    }

    fn verify_response(&self) -> Result<(), ApiError> {
        let status = self.driver.status_code()?;
        if !(200..300).contains(&status) {
            return Err(ApiError::NavigationFailed(format!(
                "expected a 2xx response, got {status}"
            )));
        }
        Ok(())
    }

    fn verify_url(&self, expected: &str) -> Result<(), ApiError> {
        let current = self.driver.current_url()?;
        if current != expected {
            return Err(ApiError::NavigationFailed(format!(
                "expected url \"{expected}\", got \"{current}\""
            )));
        }
        Ok(())
    }

    fn verify_page(&self, post_type: Option<&str>) -> Result<(), ApiError> {
        let post_type = post_type.unwrap_or(&self.profile.default_post_type);
        let heading = self.labels.edit_label(post_type).ok_or_else(|| {
            ApiError::NavigationFailed(format!(
                "no edit label registered for type \"{post_type}\""
            ))
        })?;
        if !self.driver.has_heading(&heading)? {
            return Err(ApiError::NavigationFailed(format!(
                "page heading \"{heading}\" not found"
            )));
        }
        Ok(())
    }
}

pub(crate) fn open_edit_screen<E: FactsEmitter, A: AuditSink>(
    desk: &Copydesk<E, A>,
    post_type: &str,
    title: &str,
) -> Result<OpenedPage, ApiError> {
    let ctx = AuditCtx::new(
        desk.facts(),
        ids::entity_id(post_type, title).to_string(),
        now_iso(),
    );
    let slog = StageLogger::new(&ctx);
    let fail = |err: ApiError| -> ApiError {
        slog.page_open()
            .entity(title)
            .merge(failure_fields(&err))
            .emit_failure();
        desk.audit()
            .log(Level::Error, &format!("page.open failed: {err}"));
        err
    };

    let Some(driver) = desk.browser() else {
        return Err(fail(ApiError::NavigationFailed(
            "no browser driver configured".into(),
        )));
    };
    let post = match desk.resolver().post(&EntityRef::new(post_type, title)) {
        Ok(post) => post,
        Err(e) => return Err(fail(e.into())),
    };

    let page = EditPage::new(driver, desk.labels(), desk.profile());
    match page.open(&[("id", &post.id.to_string())], Some(post_type)) {
        Ok(opened) => {
            slog.page_open()
                .entity(title)
                .field("url", json!(opened.url))
                .emit_success();
            desk.audit()
                .log(Level::Info, &format!("opened edit screen for \"{title}\""));
            Ok(opened)
        }
        Err(e) => Err(fail(e)),
    }
}
