//! Fixture table parsing: named-column rows into record-creation requests.
use log::Level;
use serde_json::json;

use super::errors::{failure_fields, ApiError};
use super::resolve::Resolver;
use super::Copydesk;
use crate::logging::audit::AuditCtx;
use crate::logging::{now_iso, AuditSink, FactsEmitter, StageLogger};
use crate::types::ids;
use crate::types::{FixtureRow, NewPost};

/// Columns understood by the parser; everything else passes through in
/// `NewPost::extra` unvalidated.
const COL_TITLE: &str = "post_title";
const COL_CONTENT: &str = "post_content";
const COL_EXCERPT: &str = "post_excerpt";
const COL_STATUS: &str = "post_status";
const COL_TYPE: &str = "post_type";
const COL_AUTHOR: &str = "post_author";
const COL_DATE: &str = "post_date";

/// Parse one row, resolving the author login (when present) to a numeric id.
fn parse_row(resolver: &Resolver<'_>, row: &FixtureRow) -> Result<NewPost, ApiError> {
    let author = match row.get(COL_AUTHOR) {
        Some(login) => Some(resolver.user_by_login(login)?.id),
        None => None,
    };
    let mut post = NewPost {
        title: row.get(COL_TITLE).unwrap_or_default().to_string(),
        content: row.get(COL_CONTENT).unwrap_or_default().to_string(),
        excerpt: row.get(COL_EXCERPT).unwrap_or_default().to_string(),
        status: row.get(COL_STATUS).unwrap_or_default().to_string(),
        post_type: row.get(COL_TYPE).unwrap_or_default().to_string(),
        author,
        date: row.get(COL_DATE).map(str::to_string),
        ..NewPost::default()
    };
    for (k, v) in &row.columns {
        if !matches!(
            k.as_str(),
            COL_TITLE | COL_CONTENT | COL_EXCERPT | COL_STATUS | COL_TYPE | COL_AUTHOR | COL_DATE
        ) {
            post.extra.insert(k.clone(), v.clone());
        }
    }
    Ok(post)
}

/// Parse the whole table before touching the store: a bad author login in
/// any row creates nothing.
pub(crate) fn parse_rows(
    resolver: &Resolver<'_>,
    rows: &[FixtureRow],
) -> Result<Vec<NewPost>, ApiError> {
    rows.iter().map(|row| parse_row(resolver, row)).collect()
}

pub(crate) fn insert<E: FactsEmitter, A: AuditSink>(
    desk: &Copydesk<E, A>,
    rows: &[FixtureRow],
) -> Result<(), ApiError> {
    let ctx = AuditCtx::new(desk.facts(), ids::batch_id(rows).to_string(), now_iso());
    let slog = StageLogger::new(&ctx);

    let posts = match parse_rows(&desk.resolver(), rows) {
        Ok(posts) => posts,
        Err(err) => {
            slog.fixture_insert().merge(failure_fields(&err)).emit_failure();
            desk.audit().log(Level::Error, &format!("fixture rejected: {err}"));
            return Err(err);
        }
    };

    for post in posts {
        let title = post.title.clone();
        let id = match desk.store().insert_post(post) {
            Ok(id) => id,
            Err(e) => {
                let err = ApiError::from(e);
                slog.fixture_insert()
                    .entity(&title)
                    .merge(failure_fields(&err))
                    .emit_failure();
                return Err(err);
            }
        };
        slog.fixture_insert()
            .entity(&title)
            .field("post_id", json!(id.0))
            .emit_success();
        desk.audit()
            .log(Level::Info, &format!("inserted \"{title}\" (id {id})"));
    }
    Ok(())
}
