//! Response Cache Store
//!
//! Main cache engine: a keyed map of captured responses with read-time
//! freshness enforcement, per-group LRU eviction, and TTL sweeping.

use std::collections::HashMap;

use axum::body::Bytes;

use crate::cache::entry::current_timestamp_ms;
use crate::cache::{CacheEntry, CachePolicies, CacheStats, RouteGroup};

// == Response Cache ==
/// In-memory store of captured GET responses.
///
/// Freshness is enforced on every lookup, independent of the background
/// sweeper: an entry at or past its group TTL counts as a miss even if
/// it is still physically present. Each group is bounded by its policy's
/// `max_entries`; inserting a new key into a full group first evicts the
/// least recently accessed entry of that same group.
///
/// The store performs no I/O and never fails. Losing it is harmless;
/// the next request repopulates it.
#[derive(Debug)]
pub struct ResponseCache {
    /// Request key to captured response
    entries: HashMap<String, CacheEntry>,
    /// Static per-group TTL/size table
    policies: CachePolicies,
    /// Process-wide counters
    stats: CacheStats,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates an empty cache governed by the given policy table.
    pub fn new(policies: CachePolicies) -> Self {
        Self {
            entries: HashMap::new(),
            policies,
            stats: CacheStats::new(),
        }
    }

    // == Lookup ==
    /// Returns the payload for `key` if present and fresh.
    ///
    /// A fresh hit updates the entry's access time and the hit counter.
    /// An absent key records a miss; a stale entry records a miss and is
    /// removed on the spot rather than waiting for the sweeper.
    pub fn lookup(&mut self, key: &str) -> Option<Bytes> {
        let now = current_timestamp_ms();

        let (found, fresh) = match self.entries.get(key) {
            Some(entry) => {
                let ttl = self.policies.policy_for(entry.group).ttl_millis;
                (true, entry.age_ms(now) < ttl)
            }
            None => (false, false),
        };

        if found && fresh {
            if let Some(entry) = self.entries.get_mut(key) {
                entry.touch(now);
                self.stats.record_hit();
                return Some(entry.payload.clone());
            }
        }

        if found {
            // Stale: drop it now so the map only holds servable entries.
            self.entries.remove(key);
            self.stats.set_size(self.entries.len());
        }
        self.stats.record_miss();
        None
    }

    // == Insert ==
    /// Stores a captured payload under `key`.
    ///
    /// Overwriting an existing key refreshes its timestamps without
    /// evicting. A new key that would push its group past `max_entries`
    /// first evicts the group's least recently accessed entry.
    pub fn insert(&mut self, key: String, group: RouteGroup, payload: Bytes) {
        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite {
            let max_entries = self.policies.policy_for(group).max_entries;
            if self.group_len(group) >= max_entries {
                self.evict_lru(group);
            }
        }

        self.entries.insert(key, CacheEntry::new(group, payload));
        self.stats.set_size(self.entries.len());
    }

    // == Remove ==
    /// Removes one entry. Returns true if the key was present.
    pub fn remove(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.stats.set_size(self.entries.len());
        }
        removed
    }

    // == Clear ==
    /// Empties the store, returning how many entries were dropped.
    ///
    /// The dropped entries count as evictions for statistics purposes.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        self.stats.record_evictions(removed as u64);
        self.stats.set_size(0);
        removed
    }

    // == Expiry Sweep ==
    /// Removes every entry at or past its group TTL, regardless of
    /// access pattern. Returns the number of entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        let now = current_timestamp_ms();

        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| {
                entry.age_ms(now) >= self.policies.policy_for(entry.group).ttl_millis
            })
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            self.entries.remove(key);
        }

        self.stats.record_evictions(expired.len() as u64);
        self.stats.set_size(self.entries.len());
        expired.len()
    }

    // == Eviction ==
    /// Evicts the least recently accessed entry of `group`.
    ///
    /// Ties on the access timestamp are broken by whichever entry the
    /// scan encounters first. A no-op when the group is empty.
    fn evict_lru(&mut self, group: RouteGroup) {
        let victim = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.group == group)
            .min_by_key(|(_, entry)| entry.last_accessed_at)
            .map(|(key, _)| key.clone());

        if let Some(key) = victim {
            self.entries.remove(&key);
            self.stats.record_eviction();
        }
    }

    // == Accessors ==
    /// Number of entries currently belonging to `group`.
    pub fn group_len(&self, group: RouteGroup) -> usize {
        self.entries
            .values()
            .filter(|entry| entry.group == group)
            .count()
    }

    /// Snapshot of the current counters with the size refreshed.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_size(self.entries.len());
        stats
    }

    /// The policy table this cache runs under.
    pub fn policies(&self) -> &CachePolicies {
        &self.policies
    }

    /// Total number of entries across all groups.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if a fresh-or-stale entry physically exists for `key`.
    #[cfg(test)]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}
