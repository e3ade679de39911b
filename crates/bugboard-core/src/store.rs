//! Mock persistence store: an in-memory stand-in for a backend database.

use std::time::Duration;

use chrono::Utc;
use tokio::time::sleep;

use crate::bug::{Bug, BugDraft, BugPatch};

/// Simulated latency for mutating store operations.
pub const DEFAULT_WRITE_LATENCY: Duration = Duration::from_millis(100);

/// Simulated latency for read-only store operations.
pub const DEFAULT_READ_LATENCY: Duration = Duration::from_millis(50);

/// In-memory bug collection with auto-incrementing identifiers.
///
/// Every operation sleeps for its configured latency before touching state;
/// mutation happens only after the sleep resolves, never across it.
/// Operations on one instance are strictly sequential (`&mut self`
/// receivers). Identifiers start at 1 and are never reused or decremented.
#[derive(Debug, Clone)]
pub struct MockBugStore {
    bugs: Vec<Bug>,
    next_id: u64,
    write_latency: Duration,
    read_latency: Duration,
}

impl Default for MockBugStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBugStore {
    /// Empty store with the default simulated latencies.
    pub fn new() -> Self {
        Self::with_latency(DEFAULT_WRITE_LATENCY, DEFAULT_READ_LATENCY)
    }

    /// Empty store with explicit latencies (zero for tests).
    pub fn with_latency(write_latency: Duration, read_latency: Duration) -> Self {
        Self {
            bugs: Vec::new(),
            next_id: 1,
            write_latency,
            read_latency,
        }
    }

    /// Persist a new record: next identifier, both timestamps stamped now,
    /// appended in insertion order.
    pub async fn create(&mut self, draft: BugDraft) -> Bug {
        sleep(self.write_latency).await;

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
        self.bugs.push(bug.clone());
        bug
    }

    /// Snapshot copy of every record in insertion order.
    pub async fn find_all(&self) -> Vec<Bug> {
        sleep(self.read_latency).await;
        self.bugs.clone()
    }

    /// Lookup one record by identifier.
    pub async fn find_by_id(&self, id: u64) -> Option<Bug> {
        sleep(self.read_latency).await;
        self.bugs.iter().find(|bug| bug.id == id).cloned()
    }

    /// Merge `patch` into the record with `id` and refresh `updated_at`.
    ///
    /// Returns the updated copy, or `None` when no record has `id`.
    pub async fn update(&mut self, id: u64, patch: BugPatch) -> Option<Bug> {
        sleep(self.write_latency).await;

        let bug = self.bugs.iter_mut().find(|bug| bug.id == id)?;
        patch.apply(bug);
        bug.touch_updated_at();
        Some(bug.clone())
    }

    /// Remove the record with `id`. `false` when no record has it.
    pub async fn delete(&mut self, id: u64) -> bool {
        sleep(self.write_latency).await;

        let before = self.bugs.len();
        self.bugs.retain(|bug| bug.id != id);
        self.bugs.len() != before
    }

    /// Empty the collection and restart identifiers at 1. Test/reset helper.
    pub fn clear(&mut self) {
        self.bugs.clear();
        self.next_id = 1;
    }

    /// Current record count.
    pub fn count(&self) -> usize {
        self.bugs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bug::{BugPriority, BugStatus};

    fn store() -> MockBugStore {
        MockBugStore::with_latency(Duration::ZERO, Duration::ZERO)
    }

    fn draft(title: &str) -> BugDraft {
        BugDraft {
            title: title.to_string(),
            description: "Something broke in a reproducible way".to_string(),
            status: BugStatus::Open,
            priority: BugPriority::Medium,
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let mut store = store();
        let first = store.create(draft("First bug")).await;
        let second = store.create(draft("Second bug")).await;

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.count(), 2);
    }

    #[tokio::test]
    async fn find_all_returns_insertion_order() {
        let mut store = store();
        store.create(draft("First bug")).await;
        store.create(draft("Second bug")).await;

        let all = store.find_all().await;
        let titles: Vec<&str> = all.iter().map(|bug| bug.title.as_str()).collect();
        assert_eq!(titles, vec!["First bug", "Second bug"]);
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_missing() {
        let mut store = store();
        store.create(draft("Only bug")).await;

        assert!(store.find_by_id(99).await.is_none());
        assert_eq!(
            store
                .find_by_id(1)
                .await
                .expect("record must exist")
                .title,
            "Only bug"
        );
    }

    #[tokio::test]
    async fn update_refreshes_updated_at_and_preserves_identity() {
        // Nonzero write latency keeps the refreshed stamp strictly later.
        let mut store = MockBugStore::with_latency(Duration::from_millis(5), Duration::ZERO);
        let created = store.create(draft("Flaky login")).await;

        let patch = BugPatch {
            status: Some(BugStatus::Resolved),
            ..BugPatch::default()
        };
        let updated = store
            .update(created.id, patch)
            .await
            .expect("record must exist");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(updated.status, BugStatus::Resolved);
    }

    #[tokio::test]
    async fn update_missing_id_returns_none() {
        let mut store = store();
        let patch = BugPatch::default();
        assert!(store.update(42, patch).await.is_none());
    }

    #[tokio::test]
    async fn delete_missing_id_returns_false_and_keeps_count() {
        let mut store = store();
        store.create(draft("Survivor")).await;

        assert!(!store.delete(99).await);
        assert_eq!(store.count(), 1);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let mut store = store();
        let first = store.create(draft("First bug")).await;
        assert!(store.delete(first.id).await);

        let second = store.create(draft("Second bug")).await;
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn clear_resets_the_identifier_sequence() {
        let mut store = store();
        store.create(draft("First bug")).await;
        store.clear();

        assert_eq!(store.count(), 0);
        let next = store.create(draft("After reset")).await;
        assert_eq!(next.id, 1);
    }
}
