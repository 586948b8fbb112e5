//! Request DTOs for the API server
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::{Deserialize, Serialize};

// == Progress ==
/// Request body for POST /api/progress.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    /// The learner this update belongs to
    pub user_id: String,
    /// The lesson being reported on
    pub lesson_id: String,
    /// Whether the lesson was finished
    pub completed: bool,
    /// Optional quiz score, 0-100
    #[serde(default)]
    pub score: Option<u32>,
}

impl ProgressUpdate {
    /// Validates the request data.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.user_id.is_empty() {
            return Some("userId cannot be empty".to_string());
        }
        if self.lesson_id.is_empty() {
            return Some("lessonId cannot be empty".to_string());
        }
        if let Some(score) = self.score {
            if score > 100 {
                return Some("score must be between 0 and 100".to_string());
            }
        }
        None
    }
}

// == Chat ==
/// One message in a chat conversation, forwarded to the provider as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Request body for POST /api/chat.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    /// Conversation history, oldest first
    pub messages: Vec<ChatMessage>,
    /// Optional model override
    #[serde(default)]
    pub model: Option<String>,
}
