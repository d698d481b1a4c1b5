//! Endpoint handlers
//!
//! Every handler works on one snapshot taken at the start of the request.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use super::response::{api_error_response, ApiError};
use super::AppState;
use crate::graph::GraphSnapshot;
use crate::query::{RoomSearch, RouteError, RouteQuery, RouteResponse};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RouteParams {
    pub from: Option<String>,
    pub to: Option<String>,
}

fn current(state: &AppState) -> Result<GraphSnapshot, RouteError> {
    state.engine.snapshot().ok_or(RouteError::GraphUnavailable)
}

fn query_rejection_response(rejection: QueryRejection) -> Response {
    api_error_response(
        StatusCode::BAD_REQUEST,
        ApiError::new("invalid_query", rejection.body_text()),
    )
}

pub(crate) async fn healthz_handler(State(state): State<AppState>) -> Response {
    match state.engine.snapshot() {
        Some(snapshot) => Json(json!({
            "status": "ok",
            "nodes": snapshot.plan.node_count(),
            "edges": snapshot.plan.edge_count(),
            "rooms": snapshot.rooms.len(),
            "floors": snapshot.plan.floors(),
            "loaded_at": snapshot.loaded_at.to_rfc3339(),
        }))
        .into_response(),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "loading" })),
        )
            .into_response(),
    }
}

pub(crate) async fn rooms_handler(State(state): State<AppState>) -> Response {
    match current(&state) {
        Ok(snapshot) => Json(snapshot.rooms.as_ref().clone()).into_response(),
        Err(e) => e.into_response(),
    }
}

pub(crate) async fn room_handler(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> Response {
    let snapshot = match current(&state) {
        Ok(s) => s,
        Err(e) => return e.into_response(),
    };
    match snapshot.rooms.get(&room_id) {
        Some(room) => Json(room.clone()).into_response(),
        None => api_error_response(
            StatusCode::NOT_FOUND,
            ApiError::new("room_not_found", "Room not found"),
        ),
    }
}

pub(crate) async fn graph_handler(State(state): State<AppState>) -> Response {
    match current(&state) {
        Ok(snapshot) => Json(snapshot.plan.to_document()).into_response(),
        Err(e) => e.into_response(),
    }
}

pub(crate) async fn search_handler(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => return query_rejection_response(rejection),
    };
    let snapshot = match current(&state) {
        Ok(s) => s,
        Err(e) => return e.into_response(),
    };
    let q = params.q.unwrap_or_default();
    Json(RoomSearch::new(q).execute(&snapshot.rooms)).into_response()
}

pub(crate) async fn route_handler(
    State(state): State<AppState>,
    params: Result<Query<RouteParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => return query_rejection_response(rejection),
    };
    let snapshot = match current(&state) {
        Ok(s) => s,
        Err(e) => return e.into_response(),
    };
    let query = RouteQuery::between(
        params.from.unwrap_or_default(),
        params.to.unwrap_or_default(),
    );

    match query.execute(&snapshot.plan) {
        Ok(route) => Json(RouteResponse::new(route, &snapshot.plan)).into_response(),
        Err(e) => {
            tracing::warn!(from = %query.from, to = %query.to, kind = e.kind(), "route rejected");
            e.into_response()
        }
    }
}
