use serde_json::Value;

pub fn filter_by_stage<I>(events: I, stages: &[&str]) -> Vec<Value>
where
    I: IntoIterator<Item = Value>,
{
    let mut out = Vec::new();
    for e in events {
        if let Some(s) = e.get("stage").and_then(|v| v.as_str()) {
            if stages.iter().any(|t| *t == s) {
                out.push(e);
            }
        }
    }
    out
}

/// Whether any event carries the given stable error id.
pub fn has_error_id<I>(events: I, id: &str) -> bool
where
    I: IntoIterator<Item = Value>,
{
    events
        .into_iter()
        .any(|e| e.get("error_id").and_then(|v| v.as_str()) == Some(id))
}
