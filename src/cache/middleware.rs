//! Response Cache Middleware
//!
//! Sits between routing and the downstream handlers for GET routes:
//! fresh entries short-circuit the handler entirely, misses run the
//! handler and capture its JSON body on the way out.

use axum::{
    body::{Body, Bytes},
    extract::{Request, State},
    http::{header, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::cache::{RouteGroup, SharedCache};

// == Constants ==
/// Response bodies larger than this are passed through uncached.
pub const MAX_PAYLOAD_BYTES: usize = 1024 * 1024; // 1 MiB

// == Middleware ==
/// Intercepts GET requests against the response cache.
///
/// Non-GET requests bypass the layer entirely: no lookup, no store,
/// no counter movement. Caching is unsafe for requests with side
/// effects.
///
/// Only responses with a 2xx status and a JSON content type are
/// captured, so a transient handler failure is never replayed for a
/// whole TTL. Handler errors propagate to the client untouched.
pub async fn response_cache(
    State(cache): State<SharedCache>,
    req: Request,
    next: Next,
) -> Response {
    if req.method() != Method::GET {
        return next.run(req).await;
    }

    let key = request_key(&req);
    let group = RouteGroup::from_path(req.uri().path());

    let cached = cache.write().await.lookup(&key);
    if let Some(payload) = cached {
        debug!(%key, "response cache hit");
        return json_response(payload);
    }

    debug!(%key, group = group.as_str(), "response cache miss");
    let response = next.run(req).await;
    capture(&cache, key, group, response).await
}

// == Key Derivation ==
/// Canonical request identity: method plus the full URI.
///
/// Path and query string are taken verbatim, so distinct query
/// strings are distinct cache entries.
fn request_key(req: &Request) -> String {
    format!("{} {}", req.method(), req.uri())
}

// == Hit Serving ==
fn json_response(payload: Bytes) -> Response {
    (
        [(header::CONTENT_TYPE, "application/json")],
        payload,
    )
        .into_response()
}

// == Miss Capture ==
/// Buffers a successful JSON response, stores it, and forwards the
/// unchanged payload to the client.
async fn capture(
    cache: &SharedCache,
    key: String,
    group: RouteGroup,
    response: Response,
) -> Response {
    if !response.status().is_success() {
        return response;
    }

    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/json"))
        .unwrap_or(false);
    if !is_json {
        return response;
    }

    let (parts, body) = response.into_parts();
    let bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(%key, error = %err, "failed to buffer response body");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    if bytes.len() <= MAX_PAYLOAD_BYTES {
        cache.write().await.insert(key, group, bytes.clone());
    }

    Response::from_parts(parts, Body::from(bytes))
}
