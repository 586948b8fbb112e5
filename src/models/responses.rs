//! Response DTOs for the API server
//!
//! Defines the structure of outgoing HTTP response bodies. Field names
//! follow the wire shape the original clients expect, hence the
//! camelCase renames.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cache::{CachePolicies, CacheStats};

// == Health ==
/// Response body for GET /api/health.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    /// Seconds since the server started
    pub uptime: u64,
}

impl HealthResponse {
    /// Creates a healthy response stamped with the current time.
    pub fn healthy(uptime: u64) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            uptime,
        }
    }
}

// == Progress ==
/// One recorded progress entry, returned by GET /api/progress/:user_id.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub user_id: String,
    pub lesson_id: String,
    pub completed: bool,
    pub score: Option<u32>,
    pub recorded_at: DateTime<Utc>,
}

/// Acknowledgement body for POST /api/progress.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressAck {
    pub success: bool,
    pub message: String,
}

impl ProgressAck {
    pub fn recorded(lesson_id: &str) -> Self {
        Self {
            success: true,
            message: format!("Progress recorded for lesson '{}'", lesson_id),
        }
    }
}

// == Cache Operations ==
/// Response body for GET /api/cache/stats.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub size: usize,
    pub cache_size: usize,
    pub hit_rate: f64,
    pub config: CachePolicies,
    pub uptime: u64,
}

impl CacheStatsResponse {
    /// Builds the stats payload from a counters snapshot.
    pub fn new(stats: CacheStats, config: CachePolicies, uptime: u64) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            size: stats.size,
            cache_size: stats.size,
            hit_rate: stats.hit_rate(),
            config,
            uptime,
        }
    }
}

/// Response body for POST /api/cache/clear.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearCacheResponse {
    pub message: String,
    pub previous_size: usize,
    pub current_size: usize,
}

impl ClearCacheResponse {
    pub fn new(previous_size: usize) -> Self {
        Self {
            message: "Cache cleared successfully".to_string(),
            previous_size,
            current_size: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialize() {
        let response = HealthResponse::healthy(42);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["uptime"], 42);
        assert!(json.get("timestamp").is_some());
    }

    #[test]
    fn test_cache_stats_response_hit_rate() {
        let stats = CacheStats {
            hits: 80,
            misses: 20,
            evictions: 5,
            size: 12,
        };
        let response = CacheStatsResponse::new(stats, CachePolicies::default(), 7);
        assert!((response.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(response.cache_size, 12);
    }

    #[test]
    fn test_cache_stats_response_wire_names() {
        let response =
            CacheStatsResponse::new(CacheStats::new(), CachePolicies::default(), 0);
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("cacheSize").is_some());
        assert!(json.get("hitRate").is_some());
        assert!(json["config"].get("lessons").is_some());
    }

    #[test]
    fn test_clear_response_shape() {
        let response = ClearCacheResponse::new(9);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["previousSize"], 9);
        assert_eq!(json["currentSize"], 0);
        assert!(json["message"].as_str().unwrap().contains("cleared"));
    }

    #[test]
    fn test_progress_ack_mentions_lesson() {
        let ack = ProgressAck::recorded("html-intro");
        assert!(ack.success);
        assert!(ack.message.contains("html-intro"));
    }
}
