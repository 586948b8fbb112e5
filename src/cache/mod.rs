//! Cache Module
//!
//! In-process HTTP response cache: route-group TTL policies, bounded
//! per-group size with LRU eviction, read-time freshness, and a
//! middleware layer that intercepts GET responses.

mod entry;
mod middleware;
mod policy;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

use std::sync::Arc;

use tokio::sync::RwLock;

// Re-export public types
pub use entry::CacheEntry;
pub use middleware::{response_cache, MAX_PAYLOAD_BYTES};
pub use policy::{CachePolicies, GroupPolicy, RouteGroup};
pub use stats::CacheStats;
pub use store::ResponseCache;

// == Shared Handle ==
/// Shared handle to the response cache.
///
/// One cache exists per process instance; the middleware, the sweeper
/// task, and the operational handlers all hold clones of this handle.
pub type SharedCache = Arc<RwLock<ResponseCache>>;
