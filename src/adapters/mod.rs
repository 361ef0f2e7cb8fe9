pub mod browser;
pub mod store;

pub use browser::{BrowserDriver, ScriptedBrowser};
pub use store::{ContentStore, MemoryStore, TypeLabels};
