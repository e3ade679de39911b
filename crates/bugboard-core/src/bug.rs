//! Bug record: the tracked defect report and its input carriers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Workflow state of a bug report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BugStatus {
    Open,
    InProgress,
    Resolved,
}

impl BugStatus {
    /// Parse a form/wire value. `None` for anything outside the closed set.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "open" => Some(Self::Open),
            "in-progress" => Some(Self::InProgress),
            "resolved" => Some(Self::Resolved),
            _ => None,
        }
    }

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
        }
    }
}

impl std::fmt::Display for BugStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Triage priority of a bug report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BugPriority {
    Low,
    Medium,
    High,
}

impl BugPriority {
    /// Parse a form/wire value. `None` for anything outside the closed set.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for BugPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tracked bug report.
///
/// The identifier is assigned by the owning collection and never changes or
/// gets reused. `created_at` is fixed at creation; `updated_at` refreshes on
/// every successful mutation, so `updated_at >= created_at` always holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bug {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub status: BugStatus,
    pub priority: BugPriority,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bug {
    /// Refresh `updated_at` after a successful mutation.
    pub fn touch_updated_at(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Validated payload for creating a bug.
///
/// Identifier and timestamps are assigned by whichever collection takes
/// ownership of the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BugDraft {
    pub title: String,
    pub description: String,
    pub status: BugStatus,
    pub priority: BugPriority,
}

/// Partial update for an existing bug. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BugPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BugStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<BugPriority>,
}

impl BugPatch {
    /// Whether the patch carries no field changes.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
    }

    /// Merge the supplied fields into `bug`. Timestamps are the caller's
    /// concern.
    pub fn apply(&self, bug: &mut Bug) {
        if let Some(title) = &self.title {
            bug.title = title.clone();
        }
        if let Some(description) = &self.description {
            bug.description = description.clone();
        }
        if let Some(status) = self.status {
            bug.status = status;
        }
        if let Some(priority) = self.priority {
            bug.priority = priority;
        }
    }
}

/// Raw form fields exactly as submitted, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BugForm {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bug() -> Bug {
        let now = Utc::now();
        Bug {
            id: 1,
            title: "Login button not responding".to_string(),
            description: "The login button doesn't respond when clicked".to_string(),
            status: BugStatus::Open,
            priority: BugPriority::High,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn status_round_trips_wire_names() {
        for raw in ["open", "in-progress", "resolved"] {
            let status = BugStatus::parse(raw).expect("wire name must parse");
            assert_eq!(status.as_str(), raw);
        }
        assert!(BugStatus::parse("closed").is_none());
    }

    #[test]
    fn priority_round_trips_wire_names() {
        for raw in ["low", "medium", "high"] {
            let priority = BugPriority::parse(raw).expect("wire name must parse");
            assert_eq!(priority.as_str(), raw);
        }
        assert!(BugPriority::parse("urgent").is_none());
    }

    #[test]
    fn status_serde_uses_kebab_case() {
        let raw = serde_json::to_string(&BugStatus::InProgress).expect("status serializes");
        assert_eq!(raw, r#""in-progress""#);

        let parsed: BugStatus =
            serde_json::from_str(r#""resolved""#).expect("wire name must deserialize");
        assert_eq!(parsed, BugStatus::Resolved);
    }

    #[test]
    fn patch_apply_touches_only_supplied_fields() {
        let mut target = bug();
        let patch = BugPatch {
            status: Some(BugStatus::Resolved),
            ..BugPatch::default()
        };

        patch.apply(&mut target);

        assert_eq!(target.status, BugStatus::Resolved);
        assert_eq!(target.title, "Login button not responding");
        assert_eq!(target.priority, BugPriority::High);
    }

    #[test]
    fn empty_patch_reports_empty() {
        assert!(BugPatch::default().is_empty());
        let patch = BugPatch {
            title: Some("Renamed".to_string()),
            ..BugPatch::default()
        };
        assert!(!patch.is_empty());
    }
}
