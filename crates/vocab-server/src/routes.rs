use std::sync::Arc;
use std::time::Duration;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::Method;
use axum::http::header::CONTENT_TYPE;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use vocab_types::{LookupSource, WordRecord};

use crate::error::AppError;
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/lookup", get(lookup_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Deserialize)]
pub struct LookupParams {
    word: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<WordRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<LookupSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LookupResponse {
    pub fn found(record: WordRecord, source: LookupSource) -> Self {
        Self {
            success: true,
            data: Some(record),
            source: Some(source),
            error: None,
        }
    }

    pub fn failure(error: String) -> Self {
        Self {
            success: false,
            data: None,
            source: None,
            error: Some(error),
        }
    }
}

pub async fn lookup_handler(
    State(state): State<Arc<AppState>>,
    params: Result<Query<LookupParams>, QueryRejection>,
) -> Result<Json<LookupResponse>, AppError> {
    let Query(params) = params.map_err(|e| {
        tracing::debug!("Rejected lookup query: {e}");
        AppError::MissingWord
    })?;

    let word = params
        .word
        .filter(|word| !word.trim().is_empty())
        .ok_or(AppError::MissingWord)?;

    let outcome = state.lookup.lookup(&word).await?;

    Ok(Json(LookupResponse::found(outcome.record, outcome.source)))
}

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
