//! Route Group Policies
//!
//! Classifies request paths into route groups and holds the static
//! TTL/size policy table for each group.

use serde::Serialize;

// == Route Group ==
/// Logical bucket of API routes sharing one TTL/size policy.
///
/// The group is derived from the path segment following `/api/`,
/// so `/api/lessons/5` belongs to `Lessons` and `/api/health`
/// to `Health`. Anything unrecognized falls into `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteGroup {
    Lessons,
    Health,
    Default,
}

impl RouteGroup {
    // == From Path ==
    /// Classifies a request path into its route group.
    pub fn from_path(path: &str) -> Self {
        match path.split('/').nth(2) {
            Some("lessons") => RouteGroup::Lessons,
            Some("health") => RouteGroup::Health,
            _ => RouteGroup::Default,
        }
    }

    /// Group name as it appears in stats output.
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteGroup::Lessons => "lessons",
            RouteGroup::Health => "health",
            RouteGroup::Default => "default",
        }
    }
}

// == Group Policy ==
/// TTL and size limits for one route group.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPolicy {
    /// How long an entry stays eligible for hit-serving, in milliseconds
    pub ttl_millis: u64,
    /// Maximum number of entries the group may hold at once
    pub max_entries: usize,
}

impl GroupPolicy {
    pub const fn new(ttl_millis: u64, max_entries: usize) -> Self {
        Self {
            ttl_millis,
            max_entries,
        }
    }
}

// == Cache Policies ==
/// The per-group policy table.
///
/// This is static configuration: the production values below are
/// compile-time constants, not environment-driven. Tests construct
/// their own tables with short TTLs and small limits.
#[derive(Debug, Clone, Serialize)]
pub struct CachePolicies {
    pub lessons: GroupPolicy,
    pub health: GroupPolicy,
    pub default: GroupPolicy,
}

impl Default for CachePolicies {
    fn default() -> Self {
        Self {
            lessons: GroupPolicy::new(10 * 60 * 1000, 50),
            health: GroupPolicy::new(2 * 60 * 1000, 10),
            default: GroupPolicy::new(5 * 60 * 1000, 100),
        }
    }
}

impl CachePolicies {
    // == Policy Lookup ==
    /// Returns the policy governing the given group.
    pub fn policy_for(&self, group: RouteGroup) -> &GroupPolicy {
        match group {
            RouteGroup::Lessons => &self.lessons,
            RouteGroup::Health => &self.health,
            RouteGroup::Default => &self.default,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_from_api_path() {
        assert_eq!(RouteGroup::from_path("/api/lessons"), RouteGroup::Lessons);
        assert_eq!(RouteGroup::from_path("/api/lessons/5"), RouteGroup::Lessons);
        assert_eq!(RouteGroup::from_path("/api/health"), RouteGroup::Health);
    }

    #[test]
    fn test_unknown_segment_falls_back_to_default() {
        assert_eq!(RouteGroup::from_path("/api/progress/u1"), RouteGroup::Default);
        assert_eq!(RouteGroup::from_path("/api/chat"), RouteGroup::Default);
        assert_eq!(RouteGroup::from_path("/"), RouteGroup::Default);
        assert_eq!(RouteGroup::from_path(""), RouteGroup::Default);
    }

    #[test]
    fn test_default_policy_table() {
        let policies = CachePolicies::default();
        assert_eq!(policies.lessons.ttl_millis, 600_000);
        assert_eq!(policies.lessons.max_entries, 50);
        assert_eq!(policies.health.ttl_millis, 120_000);
        assert_eq!(policies.health.max_entries, 10);
        assert_eq!(policies.default.ttl_millis, 300_000);
        assert_eq!(policies.default.max_entries, 100);
    }

    #[test]
    fn test_policy_for_selects_matching_group() {
        let policies = CachePolicies::default();
        assert_eq!(
            policies.policy_for(RouteGroup::Lessons).max_entries,
            policies.lessons.max_entries
        );
        assert_eq!(
            policies.policy_for(RouteGroup::Health).ttl_millis,
            policies.health.ttl_millis
        );
    }

    #[test]
    fn test_policy_table_serializes_with_wire_names() {
        let policies = CachePolicies::default();
        let json = serde_json::to_value(&policies).unwrap();
        assert_eq!(json["lessons"]["ttlMillis"], 600_000);
        assert_eq!(json["health"]["maxEntries"], 10);
    }
}
