//! Property-Based Tests for the Response Cache

use axum::body::Bytes;
use proptest::prelude::*;

use crate::cache::{CachePolicies, GroupPolicy, ResponseCache, RouteGroup};

// == Test Configuration ==
/// Limits small enough that random operation sequences hit them.
fn small_policies() -> CachePolicies {
    CachePolicies {
        lessons: GroupPolicy::new(600_000, 5),
        health: GroupPolicy::new(600_000, 3),
        default: GroupPolicy::new(600_000, 8),
    }
}

fn instant_expiry_policies() -> CachePolicies {
    CachePolicies {
        lessons: GroupPolicy::new(0, 5),
        health: GroupPolicy::new(0, 3),
        default: GroupPolicy::new(0, 8),
    }
}

// == Strategies ==
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,8}".prop_map(|s| format!("GET /api/{s}"))
}

fn group_strategy() -> impl Strategy<Value = RouteGroup> {
    prop_oneof![
        Just(RouteGroup::Lessons),
        Just(RouteGroup::Health),
        Just(RouteGroup::Default),
    ]
}

#[derive(Debug, Clone)]
enum CacheOp {
    Insert {
        key: String,
        group: RouteGroup,
        payload: String,
    },
    Lookup {
        key: String,
    },
    Remove {
        key: String,
    },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), group_strategy(), "[a-z ]{1,32}").prop_map(
            |(key, group, payload)| CacheOp::Insert {
                key,
                group,
                payload,
            }
        ),
        key_strategy().prop_map(|key| CacheOp::Lookup { key }),
        key_strategy().prop_map(|key| CacheOp::Remove { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // With TTLs far longer than a test run, a lookup hits exactly when
    // the key is physically present; hit/miss counters must track that.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store = ResponseCache::new(small_policies());
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Insert { key, group, payload } => {
                    store.insert(key, group, Bytes::from(payload.into_bytes()));
                }
                CacheOp::Lookup { key } => {
                    let present = store.contains_key(&key);
                    let result = store.lookup(&key);
                    if present {
                        expected_hits += 1;
                        prop_assert!(result.is_some());
                    } else {
                        expected_misses += 1;
                        prop_assert!(result.is_none());
                    }
                }
                CacheOp::Remove { key } => {
                    store.remove(&key);
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits, "hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "misses mismatch");
        prop_assert_eq!(stats.size, store.len(), "size mismatch");
    }

    // No operation sequence may push a group past its max_entries.
    #[test]
    fn prop_group_size_bound_holds(ops in prop::collection::vec(cache_op_strategy(), 1..80)) {
        let policies = small_policies();
        let mut store = ResponseCache::new(policies.clone());

        for op in ops {
            match op {
                CacheOp::Insert { key, group, payload } => {
                    store.insert(key, group, Bytes::from(payload.into_bytes()));
                }
                CacheOp::Lookup { key } => {
                    store.lookup(&key);
                }
                CacheOp::Remove { key } => {
                    store.remove(&key);
                }
            }

            for group in [RouteGroup::Lessons, RouteGroup::Health, RouteGroup::Default] {
                prop_assert!(
                    store.group_len(group) <= policies.policy_for(group).max_entries,
                    "group {} exceeded its bound",
                    group.as_str()
                );
            }
        }
    }

    // Re-storing a key keeps a single entry holding the latest payload.
    #[test]
    fn prop_overwrite_returns_latest(
        key in key_strategy(),
        group in group_strategy(),
        first in "[a-z]{1,16}",
        second in "[a-z]{1,16}",
    ) {
        let mut store = ResponseCache::new(small_policies());

        store.insert(key.clone(), group, Bytes::from(first.into_bytes()));
        store.insert(key.clone(), group, Bytes::from(second.clone().into_bytes()));

        prop_assert_eq!(store.group_len(group), 1);
        let payload = store.lookup(&key);
        prop_assert_eq!(payload, Some(Bytes::from(second.into_bytes())));
    }

    // With a zero TTL every entry is stale on arrival: lookups must
    // miss even though no sweep ever ran.
    #[test]
    fn prop_zero_ttl_never_serves(
        key in key_strategy(),
        group in group_strategy(),
        payload in "[a-z]{1,16}",
    ) {
        let mut store = ResponseCache::new(instant_expiry_policies());

        store.insert(key.clone(), group, Bytes::from(payload.into_bytes()));
        prop_assert!(store.lookup(&key).is_none());
        prop_assert_eq!(store.stats().hits, 0);
        prop_assert_eq!(store.stats().misses, 1);
        // The stale entry was dropped at read time.
        prop_assert_eq!(store.len(), 0);
    }

    // Clearing always empties the store and reports the prior count.
    #[test]
    fn prop_clear_drains_everything(ops in prop::collection::vec(cache_op_strategy(), 1..40)) {
        let mut store = ResponseCache::new(small_policies());

        for op in ops {
            match op {
                CacheOp::Insert { key, group, payload } => {
                    store.insert(key, group, Bytes::from(payload.into_bytes()));
                }
                CacheOp::Lookup { key } => {
                    store.lookup(&key);
                }
                CacheOp::Remove { key } => {
                    store.remove(&key);
                }
            }
        }

        let evictions_before = store.stats().evictions;
        let len_before = store.len();

        prop_assert_eq!(store.clear(), len_before);
        prop_assert_eq!(store.len(), 0);
        prop_assert_eq!(store.stats().size, 0);
        prop_assert_eq!(store.stats().evictions, evictions_before + len_before as u64);
    }
}
