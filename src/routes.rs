use crate::analytics::{summarize_with, AnalyticsPolicy};
use crate::error::AppError;
use crate::model::{AnalyticsSummary, SummaryRequest};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub policy: AnalyticsPolicy,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/analytics/summary", post(summarize_links))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .with_state(state)
}

pub async fn summarize_links(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Json<AnalyticsSummary>, AppError> {
    let Json(request) =
        payload.map_err(|rejection| AppError::MalformedPayload(rejection.body_text()))?;
    let now = request.now.unwrap_or_else(Utc::now);
    let links = request.links.unwrap_or_default();
    let summary = summarize_with(&state.policy, &links, now);
    tracing::debug!(
        total = summary.total,
        total_clicks = summary.total_clicks,
        recent_links = summary.recent_links,
        popular_links = summary.popular_links,
        "Link analytics summarized"
    );
    Ok(Json(summary))
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
