//! Request middleware: request ids, CORS and a request timeout

use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::atomic::Ordering;
use tracing::Instrument;

use super::response::{api_error_response, ApiError};
use super::AppState;

fn normalized_header_value(headers: &HeaderMap, key: &str, max_len: usize) -> Option<String> {
    let raw = headers.get(key)?.to_str().ok()?.trim();
    if raw.is_empty() || raw.len() > max_len {
        return None;
    }
    Some(raw.to_string())
}

pub(crate) async fn request_tracing_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let request_id = normalized_header_value(request.headers(), "x-request-id", 128)
        .unwrap_or_else(|| {
            format!(
                "req-{}",
                state.request_id_seed.fetch_add(1, Ordering::Relaxed)
            )
        });

    let span = tracing::info_span!(
        "http.request",
        request_id = %request_id,
        method = %request.method(),
        route = %request.uri().path(),
    );

    let mut response = next.run(request).instrument(span.clone()).await;
    span.in_scope(|| tracing::debug!(status = response.status().as_u16(), "request complete"));

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert("x-request-id", value);
    }
    response
}

pub(crate) async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let origin = normalized_header_value(request.headers(), "origin", 256)
        .filter(|o| state.config.allows_origin(o));

    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };

    if let Some(origin) = origin {
        if let Ok(value) = HeaderValue::from_str(&origin) {
            let headers = response.headers_mut();
            headers.insert("access-control-allow-origin", value);
            headers.insert(
                "access-control-allow-methods",
                HeaderValue::from_static("GET,OPTIONS"),
            );
            headers.insert(
                "access-control-allow-headers",
                HeaderValue::from_static("content-type,x-request-id"),
            );
            headers.insert("vary", HeaderValue::from_static("origin"));
        }
    }
    response
}

/// Transport-level guard only
///
/// Handlers run synchronously on the snapshot, so this bounds time spent
/// around them (body handling, scheduling) and never interrupts a search.
pub(crate) async fn timeout_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let limit = state.config.request_timeout;
    match tokio::time::timeout(limit, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            tracing::warn!(timeout_ms = limit.as_millis() as u64, "request timed out");
            api_error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                ApiError::new("timeout", "Request timed out"),
            )
        }
    }
}
