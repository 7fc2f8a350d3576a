//! Quiz route.

use axum::extract::State;
use axum::{Form, Json};
use serde::Deserialize;
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::api::server::AppState;
use crate::learning::QuizResponse;

/// Form fields for quiz generation. `difficulty` is free text.
#[derive(Debug, Deserialize)]
pub struct QuizForm {
    pub topic: String,
    pub difficulty: String,
}

/// POST /generate-quiz — form fields `topic`, `difficulty`.
pub async fn generate_quiz(
    State(state): State<Arc<AppState>>,
    Form(form): Form<QuizForm>,
) -> Result<Json<QuizResponse>, ApiError> {
    let quiz = state
        .pipeline
        .get_or_create_quiz(&form.topic, &form.difficulty)
        .await?;
    Ok(Json(quiz))
}
