//! API Module
//!
//! HTTP handlers and routing for the server's REST API.
//!
//! # Endpoints
//! - `GET /api/lessons` - Full lesson list
//! - `GET /api/lessons/:id` - One lesson
//! - `GET /api/health` - Health check
//! - `GET /api/progress/:user_id` - A learner's progress
//! - `POST /api/progress` - Record progress
//! - `POST /api/chat` - Chat completion proxy
//! - `GET /api/cache/stats` - Cache statistics
//! - `POST /api/cache/clear` - Drop all cached responses

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
