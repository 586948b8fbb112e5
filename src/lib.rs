//! KidLearner API Server
//!
//! Backend for the KidLearner educational web app: lessons, learner
//! progress, a chat assistant proxy, and an in-process HTTP response
//! cache with per-route-group TTLs and LRU eviction.

pub mod api;
pub mod cache;
pub mod chat;
pub mod config;
pub mod error;
pub mod lessons;
pub mod models;
pub mod progress;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_sweeper_task;
