use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use recboard_core::models::recommendation::{Recommendation, RecommendationInput};
use recboard_storage::error::StorageError;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// PUT body: the id plus every writable field.
#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub id: String,
    #[serde(flatten)]
    pub fields: RecommendationInput,
}

/// Always 200; a failing store yields an empty list.
pub async fn list_recommendations(State(state): State<AppState>) -> Json<ListResponse> {
    let recommendations = state.repo.list().await;
    Json(ListResponse { recommendations })
}

pub async fn create_recommendation(
    State(state): State<AppState>,
    payload: Result<Json<RecommendationInput>, JsonRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    if !state.config.submissions_enabled {
        return Err(ApiError::Forbidden(
            "Submissions are currently disabled.".to_string(),
        ));
    }

    let Json(input) = payload?;
    input.validate()?;

    if state.repo.add(&input).await {
        Ok(Json(SuccessResponse { success: true }))
    } else {
        Err(ApiError::Internal("failed to add recommendation".to_string()))
    }
}

pub async fn update_recommendation(
    State(state): State<AppState>,
    payload: Result<Json<UpdateRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    if !state.config.submissions_enabled {
        return Err(ApiError::Forbidden("Updates are currently disabled.".to_string()));
    }

    let Json(UpdateRequest { id, fields }) = payload?;
    fields.validate()?;

    match state.repo.try_update(&id, &fields).await {
        Ok(()) => Ok(Json(SuccessResponse { success: true })),
        Err(StorageError::NotFound { id }) => {
            tracing::warn!(id = %id, "update target not found");
            Err(ApiError::NotFound(format!("recommendation not found: {id}")))
        }
        Err(e) => Err(e.into()),
    }
}
