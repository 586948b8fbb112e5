//! Cache Entry Module
//!
//! Defines the structure of a single cached response.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::body::Bytes;

use crate::cache::RouteGroup;

// == Cache Entry ==
/// A captured JSON response body plus the metadata needed for
/// freshness checks and LRU eviction.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The serialized response body as it was sent to the client
    pub payload: Bytes,
    /// Route group the entry belongs to, selects the TTL/size policy
    pub group: RouteGroup,
    /// Creation timestamp (Unix milliseconds), refreshed on overwrite
    pub created_at: u64,
    /// Last hit timestamp (Unix milliseconds), drives eviction order
    pub last_accessed_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(group: RouteGroup, payload: Bytes) -> Self {
        let now = current_timestamp_ms();
        Self {
            payload,
            group,
            created_at: now,
            last_accessed_at: now,
        }
    }

    // == Age ==
    /// Milliseconds elapsed since the entry was stored.
    pub fn age_ms(&self, now: u64) -> u64 {
        now.saturating_sub(self.created_at)
    }

    // == Touch ==
    /// Marks the entry as just accessed.
    pub fn touch(&mut self, now: u64) {
        self.last_accessed_at = now;
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation_stamps_both_timestamps() {
        let entry = CacheEntry::new(RouteGroup::Lessons, Bytes::from_static(b"[]"));

        assert_eq!(entry.created_at, entry.last_accessed_at);
        assert_eq!(entry.group, RouteGroup::Lessons);
        assert_eq!(entry.payload.as_ref(), b"[]");
    }

    #[test]
    fn test_age_grows_with_the_clock() {
        let entry = CacheEntry::new(RouteGroup::Default, Bytes::from_static(b"{}"));

        assert_eq!(entry.age_ms(entry.created_at), 0);
        assert_eq!(entry.age_ms(entry.created_at + 250), 250);
    }

    #[test]
    fn test_age_saturates_on_clock_skew() {
        // A clock that moved backwards must not underflow.
        let entry = CacheEntry::new(RouteGroup::Default, Bytes::from_static(b"{}"));
        assert_eq!(entry.age_ms(entry.created_at.saturating_sub(1000)), 0);
    }

    #[test]
    fn test_touch_updates_access_time_only() {
        let mut entry = CacheEntry::new(RouteGroup::Health, Bytes::from_static(b"{}"));
        let created = entry.created_at;

        entry.touch(created + 5000);

        assert_eq!(entry.created_at, created);
        assert_eq!(entry.last_accessed_at, created + 5000);
    }
}
