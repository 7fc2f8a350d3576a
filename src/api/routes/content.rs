//! Learning content route.

use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::api::server::AppState;
use crate::learning::LearningContent;

/// POST /generate-content — body `{"topic": ...}`.
///
/// Any `explanation` / `analogy` fields in the body are ignored.
pub async fn generate_content(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LearningContent>,
) -> Result<Json<LearningContent>, ApiError> {
    let content = state.pipeline.get_or_create_content(&request.topic).await?;
    Ok(Json(content))
}
