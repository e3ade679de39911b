//! Shared helpers for command implementations.

use std::time::Duration;

use bugboard_core::validate::{validate_priority, validate_status};
use bugboard_core::{Bug, BugPriority, BugStatus};
use bugboard_session::{BugSession, DebugSink};
use serde_json::{Value, json};

/// Sink that mirrors debug-log entries to stderr, keeping stdout free for
/// command payloads.
pub struct StderrSink;

impl DebugSink for StderrSink {
    fn emit(&self, entry: &str) {
        eprintln!("{entry}");
    }
}

/// One seeded session per invocation; the backend is mock state, so every
/// run starts from the three sample records.
pub fn new_session(latency_ms: u64) -> BugSession<StderrSink> {
    BugSession::with_latency(StderrSink, Duration::from_millis(latency_ms))
}

pub fn parse_status_or_exit(raw: &str) -> BugStatus {
    if let Some(err) = validate_status(raw) {
        eprintln!("error: {}", err.message);
        std::process::exit(1);
    }
    BugStatus::parse(raw).expect("status validated above")
}

pub fn parse_priority_or_exit(raw: &str) -> BugPriority {
    if let Some(err) = validate_priority(raw) {
        eprintln!("error: {}", err.message);
        std::process::exit(1);
    }
    BugPriority::parse(raw).expect("priority validated above")
}

/// JSON projection of one bug for `--json` payloads.
pub fn bug_json(bug: &Bug) -> Value {
    json!({
        "id": bug.id,
        "title": bug.title,
        "description": bug.description,
        "status": bug.status.as_str(),
        "priority": bug.priority.as_str(),
        "createdAt": bug.created_at.to_rfc3339(),
        "updatedAt": bug.updated_at.to_rfc3339()
    })
}

pub fn print_payload(payload: &Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(payload).expect("json serialization")
    );
}
