use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use crate::server::AppState;
use crate::service;
use crate::Error;

#[derive(Deserialize)]
pub struct SumRequest {
    /// Absent or `null` decodes to `None`; the core rejects it.
    #[serde(default)]
    pub numbers: Option<Vec<i32>>,
}

#[derive(Serialize)]
pub struct SumResponse {
    pub result: i32,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Map a core error to its HTTP status.
///
/// Invalid input maps to 500, not 400; changing it changes the public
/// contract.
fn status_for(error: &Error) -> StatusCode {
    match error {
        Error::InvalidInput(_) => StatusCode::INTERNAL_SERVER_ERROR,
        Error::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub async fn compute_sum(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SumRequest>,
) -> Result<Json<SumResponse>, (StatusCode, Json<ErrorResponse>)> {
    let store = state.store.lock().await;

    let outcome = service::compute_sum(&*store, request.numbers.as_deref())
        .map_err(|e| (status_for(&e), Json(ErrorResponse { error: e.to_string() })))?;

    tracing::debug!(result = outcome.result, from_cache = outcome.from_cache, "sum computed");
    Ok(Json(SumResponse { result: outcome.result }))
}
