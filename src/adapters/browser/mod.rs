//! Browser-automation seam used by the admin page objects.
//!
//! The trait covers the narrow driver surface a page object needs: navigate,
//! inspect the current URL, inspect the last HTTP response, and look for a
//! heading in the rendered page. A live WebDriver binding implements this
//! elsewhere; `ScriptedBrowser` backs the test suite.
use crate::types::errors::Result;

pub mod scripted;

pub use scripted::ScriptedBrowser;

pub trait BrowserDriver: Send + Sync {
    /// Navigate to `url`, blocking until the driver reports the page loaded.
    fn visit(&self, url: &str) -> Result<()>;

    /// URL of the currently loaded page.
    fn current_url(&self) -> Result<String>;

    /// HTTP status code of the last response.
    fn status_code(&self) -> Result<u16>;

    /// Whether the rendered page shows a heading with exactly `text`.
    fn has_heading(&self, text: &str) -> Result<bool>;
}
