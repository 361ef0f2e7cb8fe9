//! Shared helpers for the integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use log::Level;
use serde_json::Value;

use copydesk::adapters::MemoryStore;
use copydesk::api::{ApiBuilder, Copydesk};
use copydesk::logging::{AuditSink, FactsEmitter};

#[derive(Clone, Default)]
pub struct CollectingEmitter(pub Arc<Mutex<Vec<Value>>>);

impl FactsEmitter for CollectingEmitter {
    fn emit(&self, _subsystem: &str, _event: &str, _decision: &str, fields: Value) {
        self.0.lock().unwrap().push(fields);
    }
}

#[derive(Clone, Default)]
pub struct CollectingAudit(pub Arc<Mutex<Vec<(Level, String)>>>);

impl AuditSink for CollectingAudit {
    fn log(&self, level: Level, msg: &str) {
        self.0.lock().unwrap().push((level, msg.to_string()));
    }
}

/// Build a facade over a shared in-memory store with collecting sinks.
pub fn desk(store: &MemoryStore) -> Copydesk<CollectingEmitter, CollectingAudit> {
    ApiBuilder::new(
        CollectingEmitter::default(),
        CollectingAudit::default(),
        Box::new(store.clone()),
        Box::new(store.clone()),
    )
    .build()
}
