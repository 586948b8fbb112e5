//! Learner Progress Store
//!
//! In-memory, per-instance progress bookkeeping. There is no
//! persistence layer; records live for the process lifetime, matching
//! the advisory nature of the rest of the server's state.

use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::{ProgressRecord, ProgressUpdate};

// == Progress Store ==
/// Map of user id to that user's progress entries, oldest first.
#[derive(Debug, Default)]
pub struct ProgressStore {
    records: RwLock<HashMap<String, Vec<ProgressRecord>>>,
}

impl ProgressStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record ==
    /// Appends a progress entry for the update's user, stamped with the
    /// current time. Returns the stored record.
    pub async fn record(&self, update: ProgressUpdate) -> ProgressRecord {
        let record = ProgressRecord {
            user_id: update.user_id.clone(),
            lesson_id: update.lesson_id,
            completed: update.completed,
            score: update.score,
            recorded_at: Utc::now(),
        };

        let mut records = self.records.write().await;
        records
            .entry(update.user_id)
            .or_default()
            .push(record.clone());

        record
    }

    // == Query ==
    /// All progress entries for a user; empty for unknown users.
    pub async fn for_user(&self, user_id: &str) -> Vec<ProgressRecord> {
        self.records
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn update(user_id: &str, lesson_id: &str) -> ProgressUpdate {
        ProgressUpdate {
            user_id: user_id.to_string(),
            lesson_id: lesson_id.to_string(),
            completed: true,
            score: Some(90),
        }
    }

    #[tokio::test]
    async fn test_record_and_query() {
        let store = ProgressStore::new();

        store.record(update("u1", "html-intro")).await;
        store.record(update("u1", "css-basics")).await;
        store.record(update("u2", "html-intro")).await;

        let records = store.for_user("u1").await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].lesson_id, "html-intro");
        assert_eq!(records[1].lesson_id, "css-basics");
    }

    #[tokio::test]
    async fn test_unknown_user_is_empty() {
        let store = ProgressStore::new();
        assert!(store.for_user("nobody").await.is_empty());
    }

    #[tokio::test]
    async fn test_record_returns_the_stored_entry() {
        let store = ProgressStore::new();

        let record = store.record(update("u1", "js-variables")).await;
        assert_eq!(record.user_id, "u1");
        assert_eq!(record.score, Some(90));
        assert!(record.completed);
    }
}
