use axum::{extract::State, Json};
use serde::Deserialize;
use validator::Validate;

use crate::models::GeneratedContent;
use crate::services::content;
use crate::startup::AppState;
use service_core::error::AppError;

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateContentRequest {
    /// Missing field deserializes to empty so validation owns the 400.
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub topic: Option<String>,
}

#[tracing::instrument(skip(state, request))]
pub async fn generate_content(
    State(state): State<AppState>,
    Json(request): Json<GenerateContentRequest>,
) -> Result<Json<GeneratedContent>, AppError> {
    request.validate()?;

    if request.title.trim().is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!("Title is required")));
    }

    tracing::info!(title = %request.title, "Generating blog content");

    let generated = content::expand(
        state.provider.as_ref(),
        &request.title,
        &request.description,
        request.topic.as_deref(),
    )
    .await;

    Ok(Json(generated))
}
