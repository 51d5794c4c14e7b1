use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Idea;
use crate::services::ideas;
use crate::startup::AppState;
use service_core::error::AppError;

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateIdeasRequest {
    /// Missing field deserializes to empty so validation owns the 400.
    #[serde(default)]
    #[validate(length(min = 1, message = "Topic is required"))]
    pub topic: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateIdeasResponse {
    pub ideas: Vec<Idea>,
}

#[tracing::instrument(skip(state, request))]
pub async fn generate_ideas(
    State(state): State<AppState>,
    Json(request): Json<GenerateIdeasRequest>,
) -> Result<Json<GenerateIdeasResponse>, AppError> {
    request.validate()?;

    if request.topic.trim().is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!("Topic is required")));
    }

    tracing::info!(topic = %request.topic, "Generating blog ideas");

    let ideas = ideas::generate(state.provider.as_ref(), &request.topic).await;

    Ok(Json(GenerateIdeasResponse { ideas }))
}
