//! Assertions against live content-store state.
//!
//! Every assertion resolves the record by (type, title) first; a missing
//! record aborts before any comparison. Mismatches carry expected and actual
//! values both in the error message and in the emitted `assert.result` fact.
use std::collections::BTreeSet;

use log::Level;
use serde_json::json;

use super::errors::{failure_fields, ApiError};
use super::mutate::split_terms;
use super::Copydesk;
use crate::logging::audit::AuditCtx;
use crate::logging::{now_iso, AuditSink, FactsEmitter, StageLogger};
use crate::types::{ids, EntityRef};

fn audit_ctx<'a, E: FactsEmitter, A: AuditSink>(
    desk: &'a Copydesk<E, A>,
    post_type: &str,
    title: &str,
) -> AuditCtx<'a> {
    AuditCtx::new(
        desk.facts(),
        ids::entity_id(post_type, title).to_string(),
        now_iso(),
    )
}

fn emit<E: FactsEmitter, A: AuditSink>(
    desk: &Copydesk<E, A>,
    slog: &StageLogger<'_>,
    title: &str,
    check: &str,
    result: Result<(), ApiError>,
) -> Result<(), ApiError> {
    match result {
        Ok(()) => {
            slog.assert_result()
                .entity(title)
                .field("check", json!(check))
                .emit_success();
            Ok(())
        }
        Err(err) => {
            slog.assert_result()
                .entity(title)
                .field("check", json!(check))
                .merge(failure_fields(&err))
                .emit_failure();
            desk.audit()
                .log(Level::Error, &format!("assert.{check} failed: {err}"));
            Err(err)
        }
    }
}

pub(crate) fn terms<E: FactsEmitter, A: AuditSink>(
    desk: &Copydesk<E, A>,
    post_type: &str,
    title: &str,
    taxonomy: &str,
    expected: &str,
) -> Result<(), ApiError> {
    let ctx = audit_ctx(desk, post_type, title);
    let slog = StageLogger::new(&ctx);
    let result = (|| {
        let post = desk.resolver().post(&EntityRef::new(post_type, title))?;
        let actual: BTreeSet<String> = desk
            .store()
            .object_terms(post.id, taxonomy)?
            .into_iter()
            .map(|t| t.name)
            .collect();
        let wanted: BTreeSet<String> = split_terms(expected)
            .into_iter()
            .map(str::to_string)
            .collect();
        if actual != wanted {
            let actual_list = actual.iter().cloned().collect::<Vec<_>>().join(",");
            return Err(ApiError::AssertionFailed(format!(
                "{post_type} \"{title}\" has {taxonomy} terms \"{actual_list}\", expected \"{expected}\""
            )));
        }
        Ok(())
    })();
    emit(desk, &slog, title, "terms", result)
}

pub(crate) fn status<E: FactsEmitter, A: AuditSink>(
    desk: &Copydesk<E, A>,
    post_type: &str,
    title: &str,
    expected: &str,
) -> Result<(), ApiError> {
    let ctx = audit_ctx(desk, post_type, title);
    let slog = StageLogger::new(&ctx);
    let result = (|| {
        let post = desk.resolver().post(&EntityRef::new(post_type, title))?;
        if post.status != expected {
            return Err(ApiError::AssertionFailed(format!(
                "{post_type} \"{title}\" has status \"{}\", expected \"{expected}\"",
                post.status
            )));
        }
        Ok(())
    })();
    emit(desk, &slog, title, "status", result)
}

pub(crate) fn meta_value<E: FactsEmitter, A: AuditSink>(
    desk: &Copydesk<E, A>,
    post_type: &str,
    title: &str,
    key: &str,
    value: &str,
    want_present: bool,
) -> Result<(), ApiError> {
    let ctx = audit_ctx(desk, post_type, title);
    let slog = StageLogger::new(&ctx);
    let check = if want_present { "meta_has" } else { "meta_lacks" };
    let result = (|| {
        let post = desk.resolver().post(&EntityRef::new(post_type, title))?;
        // Drop any cached reads so the comparison sees the latest write.
        desk.store().invalidate(post.id);
        let values = desk.store().meta_values(post.id, key)?;
        let present = values.iter().any(|v| v == value);
        if present != want_present {
            let stored = values.join(",");
            return Err(ApiError::AssertionFailed(format!(
                "{post_type} \"{title}\" should {}have the value \"{value}\" for the key \"{key}\" (stored: \"{stored}\")",
                if want_present { "" } else { "not " }
            )));
        }
        Ok(())
    })();
    emit(desk, &slog, title, check, result)
}
