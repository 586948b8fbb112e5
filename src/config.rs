//! Configuration Module
//!
//! Server settings loaded from environment variables. The cache policy
//! table is deliberately not configured here: it is static, compiled-in
//! configuration (see `cache::policy`).

use std::env;
use std::path::PathBuf;

/// Server configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Seconds between expiry sweeper runs
    pub sweep_interval: u64,
    /// Optional explicit path to the lesson data file
    pub lessons_path: Option<PathBuf>,
    /// API key for the chat provider; missing key enables demo mode
    pub groq_api_key: Option<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SWEEP_INTERVAL_SECS` - Sweep frequency in seconds (default: 300)
    /// - `LESSONS_PATH` - Lesson data file override (default: unset)
    /// - `GROQ_API_KEY` - Chat provider key (default: unset, demo mode)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            sweep_interval: env::var("SWEEP_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            lessons_path: env::var("LESSONS_PATH").ok().map(PathBuf::from),
            groq_api_key: env::var("GROQ_API_KEY").ok().filter(|k| !k.is_empty()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            sweep_interval: 300,
            lessons_path: None,
            groq_api_key: None,
        }
    }
}
