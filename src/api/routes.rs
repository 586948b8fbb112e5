//! API Routes
//!
//! Configures the axum router with all server endpoints.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_stats_handler, chat_handler, clear_cache_handler, get_lesson, get_progress,
    health_handler, list_lessons, record_progress, AppState,
};
use crate::cache::response_cache;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/lessons` - Full lesson list (cached)
/// - `GET /api/lessons/:id` - One lesson (cached)
/// - `GET /api/health` - Health check (cached)
/// - `GET /api/progress/:user_id` - A learner's progress entries
/// - `POST /api/progress` - Record a progress entry
/// - `POST /api/chat` - Proxy a chat completion upstream
/// - `GET /api/cache/stats` - Cache statistics
/// - `POST /api/cache/clear` - Drop all cached responses
///
/// Only lesson and health reads flow through the response cache.
/// Progress reads stay uncached so writes are immediately visible,
/// and the cache's own operational routes must never cache themselves.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let cached = Router::new()
        .route("/api/lessons", get(list_lessons))
        .route("/api/lessons/:id", get(get_lesson))
        .route("/api/health", get(health_handler))
        .layer(middleware::from_fn_with_state(
            state.cache.clone(),
            response_cache,
        ));

    Router::new()
        .merge(cached)
        .route("/api/progress", post(record_progress))
        .route("/api/progress/:user_id", get(get_progress))
        .route("/api/chat", post(chat_handler))
        .route("/api/cache/stats", get(cache_stats_handler))
        .route("/api/cache/clear", post(clear_cache_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(state)
}
