//! HTTP surface for the dashboard.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::error::Error;
use crate::query::{run_query, QueryParams, ResultBundle};
use crate::sentiment::SentimentScorer;
use crate::source::PostSource;

#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn PostSource>,
    scorer: Arc<dyn SentimentScorer>,
}

impl AppState {
    pub fn new(source: Arc<dyn PostSource>, scorer: Arc<dyn SentimentScorer>) -> Self {
        Self { source, scorer }
    }
}

/// `/api/search` runs the query pipeline; everything else falls through to
/// the static dashboard assets in `ui/`.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/search", get(search))
        .fallback_service(ServeDir::new("ui"))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

async fn search(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<ResultBundle>, ApiError> {
    let bundle = run_query(state.source.as_ref(), state.scorer.as_ref(), &params).await?;
    Ok(Json(bundle))
}

struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::MalformedInput(_) | Error::EmptyInput => StatusCode::BAD_REQUEST,
            // "No results" is an empty state for the dashboard, not a failure.
            Error::EmptyResultSet => StatusCode::NOT_FOUND,
            Error::Remote(_) => StatusCode::BAD_GATEWAY,
        };
        if matches!(self.0, Error::Remote(_)) {
            tracing::warn!(error = %self.0, "remote service failure");
        }
        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}
