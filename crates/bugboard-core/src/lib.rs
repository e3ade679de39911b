//! # bugboard-core
//!
//! Core layer for the bug tracker:
//! - `Bug` record model with closed status/priority value sets
//! - form validation rules and the free-text sanitizer
//! - `MockBugStore`, the in-memory stand-in for a backend database
//!
//! It intentionally does not orchestrate session state (seeded list,
//! loading/error flags, debug log). That concern lives in
//! `bugboard-session`.

pub mod bug;
pub mod store;
pub mod validate;

pub use bug::{Bug, BugDraft, BugForm, BugPatch, BugPriority, BugStatus};
pub use store::{DEFAULT_READ_LATENCY, DEFAULT_WRITE_LATENCY, MockBugStore};
pub use validate::{
    TITLE_TOO_SHORT_MESSAGE, ValidationError, sanitize, validate_bug, validate_description,
    validate_priority, validate_status, validate_title,
};
