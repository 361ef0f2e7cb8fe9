// Audit helpers that emit structured facts across Copydesk stages.
//
// Side-effects:
// - Emits JSON facts via `FactsEmitter` for the following stages:
//   `fixture.insert`, `terms.assign`, `meta.add`, `assert.result`, `page.open`.
// - Ensures a minimal envelope is present on every fact: `schema_version`,
//   `ts`, `run_id`, `entity`, `decision`.
//
// See `schemas/fact.v1.schema.json` for the envelope schema.
use serde_json::{json, Value};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::logging::facts::FactsEmitter;

pub(crate) const SCHEMA_VERSION: i64 = 1;

pub const TS_ZERO: &str = "1970-01-01T00:00:00Z";

pub fn now_iso() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| TS_ZERO.to_string())
}

pub(crate) struct AuditCtx<'a> {
    pub facts: &'a dyn FactsEmitter,
    pub run_id: String,
    pub ts: String,
}

impl<'a> AuditCtx<'a> {
    pub(crate) fn new(facts: &'a dyn FactsEmitter, run_id: String, ts: String) -> Self {
        Self { facts, run_id, ts }
    }
}

/// Stage for typed fact emission.
#[derive(Clone, Copy, Debug)]
pub enum Stage {
    FixtureInsert,
    TermsAssign,
    MetaAdd,
    AssertResult,
    PageOpen,
}

impl Stage {
    fn as_event(&self) -> &'static str {
        match self {
            Stage::FixtureInsert => "fixture.insert",
            Stage::TermsAssign => "terms.assign",
            Stage::MetaAdd => "meta.add",
            Stage::AssertResult => "assert.result",
            Stage::PageOpen => "page.open",
        }
    }
}

/// Decision severity for emitted facts.
#[derive(Clone, Copy, Debug)]
pub enum Decision {
    Success,
    Failure,
    Warn,
}

impl Decision {
    fn as_str(&self) -> &'static str {
        match self {
            Decision::Success => "success",
            Decision::Failure => "failure",
            Decision::Warn => "warn",
        }
    }
}

/// Builder facade over fact emission with centralized envelope insertion.
pub struct StageLogger<'a> {
    ctx: &'a AuditCtx<'a>,
}

impl<'a> StageLogger<'a> {
    pub(crate) fn new(ctx: &'a AuditCtx<'a>) -> Self {
        Self { ctx }
    }

    pub fn fixture_insert(&'a self) -> EventBuilder<'a> {
        EventBuilder::new(self.ctx, Stage::FixtureInsert)
    }
    pub fn terms_assign(&'a self) -> EventBuilder<'a> {
        EventBuilder::new(self.ctx, Stage::TermsAssign)
    }
    pub fn meta_add(&'a self) -> EventBuilder<'a> {
        EventBuilder::new(self.ctx, Stage::MetaAdd)
    }
    pub fn assert_result(&'a self) -> EventBuilder<'a> {
        EventBuilder::new(self.ctx, Stage::AssertResult)
    }
    pub fn page_open(&'a self) -> EventBuilder<'a> {
        EventBuilder::new(self.ctx, Stage::PageOpen)
    }
}

pub struct EventBuilder<'a> {
    ctx: &'a AuditCtx<'a>,
    stage: Stage,
    fields: serde_json::Map<String, Value>,
}

impl<'a> EventBuilder<'a> {
    fn new(ctx: &'a AuditCtx<'a>, stage: Stage) -> Self {
        let mut fields = serde_json::Map::new();
        fields.insert("stage".to_string(), json!(stage.as_event()));
        Self { ctx, stage, fields }
    }

    pub fn entity(mut self, entity: impl Into<String>) -> Self {
        self.fields.insert("entity".into(), json!(entity.into()));
        self
    }

    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn merge(mut self, extra: Value) -> Self {
        if let Some(obj) = extra.as_object() {
            for (k, v) in obj.iter() {
                self.fields.insert(k.clone(), v.clone());
            }
        }
        self
    }

    pub fn emit(self, decision: Decision) {
        let mut fields = self.fields;
        fields
            .entry("decision")
            .or_insert(json!(decision.as_str()));
        fields
            .entry("schema_version")
            .or_insert(json!(SCHEMA_VERSION));
        fields.entry("ts").or_insert(json!(self.ctx.ts));
        fields.entry("run_id").or_insert(json!(self.ctx.run_id));
        fields.entry("entity").or_insert(json!(""));
        self.ctx.facts.emit(
            "copydesk",
            self.stage.as_event(),
            decision.as_str(),
            Value::Object(fields),
        );
    }

    pub fn emit_success(self) {
        self.emit(Decision::Success)
    }
    pub fn emit_failure(self) {
        self.emit(Decision::Failure)
    }
    pub fn emit_warn(self) {
        self.emit(Decision::Warn)
    }
}
