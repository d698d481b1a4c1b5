//! Error bodies and status mapping for the API

use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::query::RouteError;

/// Error payload carried under the top-level `error` key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[must_use]
pub(crate) fn api_error_response(status: StatusCode, err: ApiError) -> Response {
    let body = Json(json!({ "error": err }));
    let mut resp = (status, body).into_response();
    if status == StatusCode::SERVICE_UNAVAILABLE {
        resp.headers_mut()
            .insert("retry-after", HeaderValue::from_static("3"));
    }
    resp
}

#[must_use]
pub(crate) fn route_error_status(err: &RouteError) -> StatusCode {
    match err {
        RouteError::MissingParameter(_) => StatusCode::BAD_REQUEST,
        RouteError::UnknownNode(_) | RouteError::NoPathFound { .. } => StatusCode::NOT_FOUND,
        RouteError::GraphUnavailable => StatusCode::SERVICE_UNAVAILABLE,
    }
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        api_error_response(
            route_error_status(&self),
            ApiError::new(self.kind(), self.to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(
            route_error_status(&RouteError::MissingParameter("from")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            route_error_status(&RouteError::UnknownNode("x".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            route_error_status(&RouteError::NoPathFound {
                from: "a".into(),
                to: "b".into()
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            route_error_status(&RouteError::GraphUnavailable),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn unavailable_sets_retry_after() {
        let resp = RouteError::GraphUnavailable.into_response();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(resp.headers().get("retry-after").unwrap(), "3");
    }
}
