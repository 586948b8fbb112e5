//! API Handlers
//!
//! HTTP request handlers for each endpoint, plus the shared
//! application state they operate on.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use tokio::sync::RwLock;

use crate::cache::{CachePolicies, ResponseCache, SharedCache};
use crate::chat::ChatClient;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::lessons::LessonLibrary;
use crate::models::{
    CacheStatsResponse, ChatRequest, ClearCacheResponse, HealthResponse, Lesson,
    ProgressAck, ProgressRecord, ProgressUpdate,
};
use crate::progress::ProgressStore;

// == Application State ==
/// State shared across all handlers.
///
/// Everything here is constructed once at process start and injected
/// into the router; nothing is a module-level singleton. Each process
/// instance owns its own cache and progress records.
#[derive(Clone)]
pub struct AppState {
    /// The response cache, shared with the middleware and the sweeper
    pub cache: SharedCache,
    /// Immutable lesson catalogue
    pub lessons: Arc<LessonLibrary>,
    /// In-memory learner progress
    pub progress: Arc<ProgressStore>,
    /// Upstream chat provider client
    pub chat: Arc<ChatClient>,
    /// Server start time, reported as uptime
    pub started_at: Instant,
}

impl AppState {
    /// Creates state from already-built components.
    pub fn new(cache: ResponseCache, lessons: LessonLibrary, chat: ChatClient) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            lessons: Arc::new(lessons),
            progress: Arc::new(ProgressStore::new()),
            chat: Arc::new(chat),
            started_at: Instant::now(),
        }
    }

    /// Creates state from configuration, with the production cache
    /// policy table.
    pub fn from_config(config: &Config) -> Self {
        let cache = ResponseCache::new(CachePolicies::default());
        let lessons = LessonLibrary::load(config.lessons_path.as_deref());
        let chat = ChatClient::new(config.groq_api_key.clone());
        Self::new(cache, lessons, chat)
    }

    /// Seconds since the state was constructed.
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

// == Lessons ==
/// Handler for GET /api/lessons.
pub async fn list_lessons(State(state): State<AppState>) -> Json<Vec<Lesson>> {
    Json(state.lessons.all().to_vec())
}

/// Handler for GET /api/lessons/:id.
pub async fn get_lesson(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Lesson>> {
    state
        .lessons
        .find(&id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::LessonNotFound(id))
}

// == Health ==
/// Handler for GET /api/health.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.uptime_secs()))
}

// == Progress ==
/// Handler for GET /api/progress/:user_id.
pub async fn get_progress(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<Vec<ProgressRecord>> {
    Json(state.progress.for_user(&user_id).await)
}

/// Handler for POST /api/progress.
pub async fn record_progress(
    State(state): State<AppState>,
    Json(update): Json<ProgressUpdate>,
) -> Result<Json<ProgressAck>> {
    if let Some(error_msg) = update.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let record = state.progress.record(update).await;
    Ok(Json(ProgressAck::recorded(&record.lesson_id)))
}

// == Chat ==
/// Handler for POST /api/chat.
///
/// The provider's completion JSON is forwarded to the caller verbatim.
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<Value>> {
    if request.messages.is_empty() {
        return Err(ApiError::InvalidRequest(
            "messages array is required".to_string(),
        ));
    }

    let completion = state
        .chat
        .complete(&request.messages, request.model.as_deref())
        .await?;
    Ok(Json(completion))
}

// == Cache Operations ==
/// Handler for GET /api/cache/stats.
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    let cache = state.cache.read().await;
    Json(CacheStatsResponse::new(
        cache.stats(),
        cache.policies().clone(),
        state.uptime_secs(),
    ))
}

/// Handler for POST /api/cache/clear.
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<ClearCacheResponse> {
    let previous_size = state.cache.write().await.clear();
    Json(ClearCacheResponse::new(previous_size))
}
