//! Field validation rules for bug submissions.
//!
//! Backend-shaped checks applied at the form boundary. Each rule returns
//! `None` when its field passes, or exactly one error for that field.
//! Length limits count Unicode scalar values on the trimmed text.

use serde::{Deserialize, Serialize};

use crate::bug::{BugForm, BugPriority, BugStatus};

/// Rejection message for a title below the minimum length.
///
/// Shared with the session layer, whose create-time guard re-checks the
/// title and must surface the same text.
pub const TITLE_TOO_SHORT_MESSAGE: &str = "Title must be at least 5 characters long";

/// A single violated constraint on one submitted field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Check a submitted title: required, trimmed length in [5, 100].
pub fn validate_title(title: &str) -> Option<ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Some(ValidationError::new("title", "Title is required"));
    }

    let len = trimmed.chars().count();
    if len < 5 {
        return Some(ValidationError::new("title", TITLE_TOO_SHORT_MESSAGE));
    }
    if len > 100 {
        return Some(ValidationError::new(
            "title",
            "Title must be less than 100 characters",
        ));
    }

    None
}

/// Check a submitted description: required, trimmed length in [10, 1000].
pub fn validate_description(description: &str) -> Option<ValidationError> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Some(ValidationError::new("description", "Description is required"));
    }

    let len = trimmed.chars().count();
    if len < 10 {
        return Some(ValidationError::new(
            "description",
            "Description must be at least 10 characters long",
        ));
    }
    if len > 1000 {
        return Some(ValidationError::new(
            "description",
            "Description must be less than 1000 characters",
        ));
    }

    None
}

/// Check a submitted priority against the closed value set.
pub fn validate_priority(priority: &str) -> Option<ValidationError> {
    if BugPriority::parse(priority).is_none() {
        return Some(ValidationError::new(
            "priority",
            "Priority must be low, medium, or high",
        ));
    }
    None
}

/// Check a submitted status against the closed value set.
pub fn validate_status(status: &str) -> Option<ValidationError> {
    if BugStatus::parse(status).is_none() {
        return Some(ValidationError::new(
            "status",
            "Status must be open, in-progress, or resolved",
        ));
    }
    None
}

/// Run every field rule in fixed order: title, description, priority,
/// status. At most one error per field; an empty vec accepts the form.
pub fn validate_bug(form: &BugForm) -> Vec<ValidationError> {
    [
        validate_title(&form.title),
        validate_description(&form.description),
        validate_priority(&form.priority),
        validate_status(&form.status),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Trim surrounding whitespace and strip every `<` and `>` from free-text
/// input. Not an HTML strip: all other characters pass through verbatim.
/// Idempotent.
pub fn sanitize(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| !matches!(c, '<' | '>'))
        .collect()
}
