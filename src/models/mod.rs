//! Request and Response models for the API server
//!
//! DTOs used for serializing/deserializing HTTP request and response
//! bodies, plus the lesson record shared by both sides.

pub mod lesson;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use lesson::Lesson;
pub use requests::{ChatMessage, ChatRequest, ProgressUpdate};
pub use responses::{
    CacheStatsResponse, ClearCacheResponse, HealthResponse, ProgressAck, ProgressRecord,
};
