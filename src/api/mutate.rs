//! Mutations against the content store, looked up by display title.
use log::Level;
use serde_json::json;

use super::errors::{failure_fields, ApiError};
use super::Copydesk;
use crate::logging::audit::AuditCtx;
use crate::logging::{now_iso, AuditSink, FactsEmitter, StageLogger};
use crate::types::{ids, EntityRef, MetaEntry};

/// Split a comma-separated term list from step text into trimmed names.
pub(crate) fn split_terms(terms: &str) -> Vec<&str> {
    terms
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}

pub(crate) fn assign_terms<E: FactsEmitter, A: AuditSink>(
    desk: &Copydesk<E, A>,
    post_type: &str,
    title: &str,
    taxonomy: &str,
    terms: &str,
) -> Result<(), ApiError> {
    let ctx = AuditCtx::new(
        desk.facts(),
        ids::entity_id(post_type, title).to_string(),
        now_iso(),
    );
    let slog = StageLogger::new(&ctx);
    let fail = |err: ApiError| -> ApiError {
        slog.terms_assign()
            .entity(title)
            .field("taxonomy", json!(taxonomy))
            .merge(failure_fields(&err))
            .emit_failure();
        desk.audit()
            .log(Level::Error, &format!("terms.assign failed: {err}"));
        err
    };

    let resolver = desk.resolver();
    let post = match resolver.post(&EntityRef::new(post_type, title)) {
        Ok(post) => post,
        Err(e) => return Err(fail(e.into())),
    };

    // Resolve every name before assigning anything: all-or-nothing.
    let mut slugs = Vec::new();
    for name in split_terms(terms) {
        match resolver.term_slug(taxonomy, name) {
            Ok(slug) => slugs.push(slug),
            Err(e) => return Err(fail(e.into())),
        }
    }

    if let Err(e) = desk.store().set_object_terms(post.id, taxonomy, &slugs) {
        return Err(fail(e.into()));
    }

    slog.terms_assign()
        .entity(title)
        .field("taxonomy", json!(taxonomy))
        .field("slugs", json!(slugs))
        .emit_success();
    desk.audit().log(
        Level::Info,
        &format!("assigned {taxonomy} terms to \"{title}\""),
    );
    Ok(())
}

pub(crate) fn add_meta<E: FactsEmitter, A: AuditSink>(
    desk: &Copydesk<E, A>,
    post_type: &str,
    title: &str,
    entries: &[MetaEntry],
) -> Result<(), ApiError> {
    let ctx = AuditCtx::new(
        desk.facts(),
        ids::entity_id(post_type, title).to_string(),
        now_iso(),
    );
    let slog = StageLogger::new(&ctx);
    let fail = |err: ApiError| -> ApiError {
        slog.meta_add()
            .entity(title)
            .merge(failure_fields(&err))
            .emit_failure();
        desk.audit()
            .log(Level::Error, &format!("meta.add failed: {err}"));
        err
    };

    let post = match desk.resolver().post(&EntityRef::new(post_type, title)) {
        Ok(post) => post,
        Err(e) => return Err(fail(e.into())),
    };

    for entry in entries {
        if let Err(e) = desk.store().add_meta(post.id, &entry.key, &entry.value) {
            return Err(fail(e.into()));
        }
    }

    slog.meta_add()
        .entity(title)
        .field("entries", json!(entries.len()))
        .emit_success();
    desk.audit().log(
        Level::Info,
        &format!("added {} meta entries to \"{title}\"", entries.len()),
    );
    Ok(())
}
