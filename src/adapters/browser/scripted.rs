//! Scripted driver: a routed fake standing in for a live browser session.
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::BrowserDriver;
use crate::types::errors::{Error, ErrorKind, Result};

#[derive(Clone, Debug)]
struct Page {
    status: u16,
    headings: Vec<String>,
}

#[derive(Default)]
struct Inner {
    routes: BTreeMap<String, Page>,
    current: Option<String>,
}

/// Clonable handle; all clones share the same routed pages and navigation
/// state.
#[derive(Clone, Default)]
pub struct ScriptedBrowser(Arc<Mutex<Inner>>);

impl ScriptedBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.0.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Register a page at `url`. Visiting an unregistered URL yields a 404
    /// with no headings.
    pub fn route(&self, url: &str, status: u16, headings: &[&str]) {
        self.lock().routes.insert(
            url.to_string(),
            Page {
                status,
                headings: headings.iter().map(|h| (*h).to_string()).collect(),
            },
        );
    }
}

impl BrowserDriver for ScriptedBrowser {
    fn visit(&self, url: &str) -> Result<()> {
        self.lock().current = Some(url.to_string());
        Ok(())
    }

    fn current_url(&self) -> Result<String> {
        self.lock().current.clone().ok_or_else(|| Error {
            kind: ErrorKind::Navigation,
            msg: "no page loaded".into(),
        })
    }

    fn status_code(&self) -> Result<u16> {
        let inner = self.lock();
        let current = inner.current.as_ref().ok_or_else(|| Error {
            kind: ErrorKind::Navigation,
            msg: "no page loaded".into(),
        })?;
        Ok(inner.routes.get(current).map_or(404, |p| p.status))
    }

    fn has_heading(&self, text: &str) -> Result<bool> {
        let inner = self.lock();
        let current = inner.current.as_ref().ok_or_else(|| Error {
            kind: ErrorKind::Navigation,
            msg: "no page loaded".into(),
        })?;
        Ok(inner
            .routes
            .get(current)
            .is_some_and(|p| p.headings.iter().any(|h| h == text)))
    }
}
