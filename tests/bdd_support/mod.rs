#![cfg_attr(
    not(feature = "bdd"),
    allow(unused_imports, unused_variables, dead_code)
)]

use std::sync::{Arc, Mutex};

use log::Level;
use serde_json::Value;

use copydesk::logging::{AuditSink, FactsEmitter};

pub mod facts;
pub mod util;

/// Facts emitter that collects every emitted fact for later inspection.
#[derive(Clone, Default)]
pub struct CollectingEmitter(pub Arc<Mutex<Vec<Value>>>);

impl FactsEmitter for CollectingEmitter {
    fn emit(&self, _subsystem: &str, _event: &str, _decision: &str, fields: Value) {
        self.0.lock().unwrap().push(fields);
    }
}

/// Audit sink that collects log lines for later inspection.
#[derive(Clone, Default)]
pub struct CollectingAudit(pub Arc<Mutex<Vec<(Level, String)>>>);

impl AuditSink for CollectingAudit {
    fn log(&self, level: Level, msg: &str) {
        self.0.lock().unwrap().push((level, msg.to_string()));
    }
}
