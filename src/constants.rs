//! Shared crate-wide constants for Copydesk.
//!
//! Centralizes magic values and default labels used across modules.
//! Adjusting these here will propagate through the crate.

/// Path template for a record's admin edit screen. `{id}` is substituted with
/// the record's numeric identifier before navigation.
pub const EDIT_PATH_TEMPLATE: &str = "/wp-admin/post.php?post={id}&action=edit";

/// Admin root prepended to path templates. Empty by default so scripted
/// drivers can be routed with bare paths; point it at a live site otherwise.
pub const DEFAULT_ADMIN_ROOT: &str = "";

/// Post type assumed when a step or page object is not given one explicitly.
pub const DEFAULT_POST_TYPE: &str = "post";

/// Status applied by the reference store when a fixture row carries none.
pub const DEFAULT_POST_STATUS: &str = "draft";

/// UUIDv5 namespace tag for deterministic batch/entity IDs.
/// Facts for the same logical entity keep the same `run_id` across runs.
pub const NS_TAG: &str = "https://copydesk/acceptance";
