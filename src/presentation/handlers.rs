// HTTP request handlers
use crate::application::dashboard_service::SyncOutcome;
use crate::domain::tab::{Language, TabId};
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

#[derive(Deserialize)]
pub struct LangQuery {
    pub lang: Option<Language>,
}

#[derive(Deserialize)]
pub struct ElapsedQuery {
    pub elapsed_ms: Option<u64>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

async fn respond<T: Serialize>(status: StatusCode, data: &T, compress: bool) -> Response {
    match json_response(status, data, compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

async fn error(status: StatusCode, message: impl Into<String>, compress: bool) -> Response {
    respond(status, &ErrorBody { error: message.into() }, compress).await
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// List the tab identifiers
pub async fn list_tabs(headers: HeaderMap) -> Response {
    let tabs: Vec<&str> = TabId::ALL.iter().map(TabId::as_str).collect();
    respond(StatusCode::OK, &tabs, accepts_brotli(&headers)).await
}

/// Sync a tab with the published sheets and return the resulting section
pub async fn sync_dashboard(
    Path(tab): Path<String>,
    Query(query): Query<LangQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let compress = accepts_brotli(&headers);
    let tab = match tab.parse::<TabId>() {
        Ok(tab) => tab,
        Err(e) => return error(StatusCode::NOT_FOUND, e.to_string(), compress).await,
    };
    let lang = query.lang.unwrap_or_default();

    match state.dashboard_service.sync(tab, lang).await {
        SyncOutcome::Applied(snapshot) => respond(StatusCode::OK, &snapshot, compress).await,
        SyncOutcome::Superseded => {
            error(StatusCode::CONFLICT, "superseded by a newer request", compress).await
        }
    }
}

/// Latest committed section
pub async fn current_dashboard(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let compress = accepts_brotli(&headers);
    match state.dashboard_service.current().await {
        Some(snapshot) => respond(StatusCode::OK, &snapshot, compress).await,
        None => error(StatusCode::NOT_FOUND, "no dashboard synced yet", compress).await,
    }
}

/// Interpolated vehicle positions of the current section
pub async fn vehicle_positions(
    Query(query): Query<ElapsedQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let elapsed = Duration::from_millis(query.elapsed_ms.unwrap_or(0));
    let positions = state.dashboard_service.vehicle_positions(elapsed).await;
    respond(StatusCode::OK, &positions, accepts_brotli(&headers)).await
}
