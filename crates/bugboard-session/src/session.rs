//! Session state manager: the single owner of the live bug list.

use std::time::Duration;

use chrono::Utc;
use tokio::time::sleep;

use bugboard_core::validate::{TITLE_TOO_SHORT_MESSAGE, ValidationError};
use bugboard_core::{Bug, BugDraft, BugPatch, BugPriority, BugStatus};

use crate::debug_log::{DebugLog, DebugSink};

/// Simulated network latency for session operations.
pub const DEFAULT_SESSION_LATENCY: Duration = Duration::from_millis(500);

/// Errors a session operation can surface to its caller.
///
/// Only `create_bug` raises; update/delete complete silently when their
/// target is missing.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The create-time guard rejected the submission.
    #[error("{0}")]
    Validation(ValidationError),
}

/// Single-owner state container for the bug list.
///
/// Holds the canonical newest-first list, a loading flag, a single error
/// slot, and the bounded debug log. Construction seeds three sample records
/// exactly once; all further mutation goes through
/// [`create_bug`](Self::create_bug), [`update_bug`](Self::update_bug), and
/// [`delete_bug`](Self::delete_bug).
///
/// Operations suspend only at the simulated-latency sleep; state mutation
/// happens synchronously after resume, so the list transitions atomically
/// from pre- to post-operation state and no torn reads are observable. The
/// exclusive receiver makes overlapping operations on one session
/// unrepresentable.
pub struct BugSession<S: DebugSink> {
    bugs: Vec<Bug>,
    loading: bool,
    error: Option<String>,
    debug_log: DebugLog,
    sink: S,
    next_id: u64,
    latency: Duration,
}

impl<S: DebugSink> BugSession<S> {
    /// Seeded session with the default simulated latency.
    pub fn new(sink: S) -> Self {
        Self::with_latency(sink, DEFAULT_SESSION_LATENCY)
    }

    /// Seeded session with an explicit operation latency (zero for tests).
    pub fn with_latency(sink: S, latency: Duration) -> Self {
        let mut session = Self {
            bugs: Vec::new(),
            loading: false,
            error: None,
            debug_log: DebugLog::new(),
            sink,
            next_id: 1,
            latency,
        };
        session.seed();
        session
    }

    fn seed(&mut self) {
        let now = Utc::now();
        let day = chrono::Duration::days(1);
        let hour = chrono::Duration::hours(1);

        let seeds = [
            Bug {
                id: 1,
                title: "Login button not responding".to_string(),
                description: "The login button doesn't respond when clicked on mobile devices"
                    .to_string(),
                status: BugStatus::Open,
                priority: BugPriority::High,
                created_at: now - day,
                updated_at: now - day,
            },
            Bug {
                id: 2,
                title: "Dashboard loading slowly".to_string(),
                description: "Dashboard takes more than 5 seconds to load user data".to_string(),
                status: BugStatus::InProgress,
                priority: BugPriority::Medium,
                created_at: now - day * 2,
                updated_at: now - hour,
            },
            Bug {
                id: 3,
                title: "Typo in footer text".to_string(),
                description: "There's a spelling mistake in the footer copyright text".to_string(),
                status: BugStatus::Resolved,
                priority: BugPriority::Low,
                created_at: now - day * 3,
                updated_at: now - hour * 2,
            },
        ];

        self.next_id = seeds.len() as u64 + 1;
        self.bugs = seeds.into();
        self.add_debug_log("Initialized with sample bug data");
    }

    /// Validate, persist, and prepend one new bug.
    ///
    /// The only session operation that can fail: the create-time guard
    /// re-checks the raw title length, parks the message in the error slot,
    /// and re-raises to the caller. The list is untouched on failure.
    pub async fn create_bug(&mut self, draft: BugDraft) -> Result<(), SessionError> {
        self.loading = true;
        self.error = None;
        self.add_debug_log(&format!("Creating bug: {}", draft.title));

        sleep(self.latency).await;

        // Guards the raw (untrimmed) title only; the full field rules run
        // at the form boundary.
        if draft.title.chars().count() < 5 {
            let err = ValidationError::new("title", TITLE_TOO_SHORT_MESSAGE);
            self.error = Some(err.message.clone());
            self.add_debug_log(&format!("Error creating bug: {}", err.message));
            self.loading = false;
            return Err(SessionError::Validation(err));
        }

        let now = Utc::now();
        let bug = Bug {
            id: self.next_id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            priority: draft.priority,
            created_at: now,
            updated_at: now,
        };
        self.next_id += 1;

        let id = bug.id;
        self.bugs.insert(0, bug);
        self.add_debug_log(&format!("Successfully created bug with ID: {id}"));
        self.loading = false;
        Ok(())
    }

    /// Merge `patch` into the bug with `id` and refresh its `updated_at`.
    ///
    /// A missing id is a silent no-op: the operation completes, logs its
    /// outcome, and raises nothing. All other records and the list order
    /// are untouched.
    pub async fn update_bug(&mut self, id: u64, patch: BugPatch) {
        self.loading = true;
        self.error = None;
        let fields = serde_json::to_string(&patch).expect("patch should serialize");
        self.add_debug_log(&format!("Updating bug {id} with: {fields}"));

        sleep(self.latency).await;

        if let Some(bug) = self.bugs.iter_mut().find(|bug| bug.id == id) {
            patch.apply(bug);
            bug.touch_updated_at();
        }

        self.add_debug_log(&format!("Successfully updated bug {id}"));
        self.loading = false;
    }

    /// Remove the bug with `id`, preserving the order of the survivors.
    ///
    /// A missing id is a silent no-op, like [`update_bug`](Self::update_bug).
    pub async fn delete_bug(&mut self, id: u64) {
        self.loading = true;
        self.error = None;
        self.add_debug_log(&format!("Deleting bug {id}"));

        sleep(self.latency).await;

        self.bugs.retain(|bug| bug.id != id);
        self.add_debug_log(&format!("Successfully deleted bug {id}"));
        self.loading = false;
    }

    /// Record a timestamped diagnostic entry and emit it through the sink.
    pub fn add_debug_log(&mut self, message: &str) {
        let entry = format!("[{}] {message}", Utc::now().format("%H:%M:%S"));
        self.sink.emit(&entry);
        self.debug_log.push(entry);
    }

    /// Live bug list, newest first.
    pub fn bugs(&self) -> &[Bug] {
        &self.bugs
    }

    /// Whether an operation is currently in flight.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// The outstanding error message from the last failed operation.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Debug-log entries, oldest first.
    pub fn debug_logs(&self) -> impl Iterator<Item = &str> {
        self.debug_log.iter()
    }

    /// The most recent debug-log entry.
    pub fn latest_debug_log(&self) -> Option<&str> {
        self.debug_log.latest()
    }
}
