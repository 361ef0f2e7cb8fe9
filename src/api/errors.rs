use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("reference not found: {0}")]
    ReferenceNotFound(String),
    #[error("assertion failed: {0}")]
    AssertionFailed(String),
    #[error("navigation failed: {0}")]
    NavigationFailed(String),
    #[error("content store error: {0}")]
    StoreError(String),
}

impl From<crate::types::errors::Error> for ApiError {
    fn from(e: crate::types::errors::Error) -> Self {
        use crate::types::errors::ErrorKind::{Assertion, Navigation, NotFound, Store};
        match e.kind {
            NotFound => ApiError::ReferenceNotFound(e.msg),
            Assertion => ApiError::AssertionFailed(e.msg),
            Navigation => ApiError::NavigationFailed(e.msg),
            Store => ApiError::StoreError(e.msg),
        }
    }
}

// Stable identifiers carried in failure facts.
// We intentionally keep SCREAMING_SNAKE_CASE to match emitted IDs.
#[allow(non_camel_case_types, reason = "error IDs must match the emitted fact format")]
#[derive(Clone, Copy, Debug)]
pub enum ErrorId {
    E_NOT_FOUND,
    E_ASSERT,
    E_NAV,
    E_STORE,
    E_GENERIC,
}

#[must_use]
pub const fn id_str(id: ErrorId) -> &'static str {
    match id {
        ErrorId::E_NOT_FOUND => "E_NOT_FOUND",
        ErrorId::E_ASSERT => "E_ASSERT",
        ErrorId::E_NAV => "E_NAV",
        ErrorId::E_STORE => "E_STORE",
        ErrorId::E_GENERIC => "E_GENERIC",
    }
}

#[must_use]
pub const fn exit_code_for(id: ErrorId) -> i32 {
    match id {
        ErrorId::E_NOT_FOUND => 10,
        ErrorId::E_ASSERT => 20,
        ErrorId::E_NAV => 30,
        ErrorId::E_STORE => 40,
        ErrorId::E_GENERIC => 1,
    }
}

/// Classify an `ApiError` into its stable summary id.
#[must_use]
pub fn error_id_for(err: &ApiError) -> ErrorId {
    match err {
        ApiError::ReferenceNotFound(_) => ErrorId::E_NOT_FOUND,
        ApiError::AssertionFailed(_) => ErrorId::E_ASSERT,
        ApiError::NavigationFailed(_) => ErrorId::E_NAV,
        ApiError::StoreError(_) => ErrorId::E_STORE,
    }
}

/// Fields attached to every failure fact: message, stable id, exit code.
#[must_use]
pub fn failure_fields(err: &ApiError) -> Value {
    let id = error_id_for(err);
    json!({
        "error": err.to_string(),
        "error_id": id_str(id),
        "exit_code": exit_code_for(id),
    })
}
