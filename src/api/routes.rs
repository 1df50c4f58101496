use axum::{
    routing::{get, post},
    Router,
    extract::{Json, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};
use tower_http::cors::{CorsLayer, Any};
use std::time::Instant;

use crate::api::models::{HealthResponse, SummarizeRequest, SummarizeResponse};
use crate::api::page::INDEX_HTML;
use crate::api::response;
use crate::error::AppError;
use crate::pipeline::digest_url;
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/summarize", post(summarize_handler))
        .route("/api/health", get(health_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    response::success(HealthResponse {
        status: "ok".to_string(),
        model: state.summarizer.model_name().to_string(),
    })
}

async fn summarize_handler(
    State(state): State<AppState>,
    Json(req): Json<SummarizeRequest>,
) -> impl IntoResponse {
    let url = req.url.trim();
    if url.is_empty() {
        return response::error::<SummarizeResponse>(StatusCode::BAD_REQUEST, "A URL is required");
    }

    tracing::info!(%url, "Processing request");
    let start_time = Instant::now();

    let result = digest_url(url, &state.summarizer, state.config.fetch_timeout).await;
    tracing::info!(%url, "Request processing took {:?}", start_time.elapsed());

    match result {
        Ok(digest) => {
            tracing::info!(%url, "Successfully summarized URL");
            response::success(SummarizeResponse::from(digest))
        }
        Err(err) => {
            match &err {
                AppError::InsufficientContent => tracing::info!(%url, "Insufficient content"),
                other => tracing::error!(%url, error = %other, "Summarization failed"),
            }
            response::from_app_error(&err)
        }
    }
}
