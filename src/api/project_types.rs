use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use uuid::Uuid;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::lookups::require_class;
use crate::core::state::AppState;
use crate::core::time::{parse_rfc3339_utc, primitive_now_utc};
use crate::repositories::project_types::CreateProjectType;
use crate::schemas::project_type::{ProjectTypeCreate, ProjectTypeResponse};

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/", post(create_project_type))
}

async fn create_project_type(
    State(state): State<AppState>,
    Json(payload): Json<ProjectTypeCreate>,
) -> Result<(StatusCode, Json<ProjectTypeResponse>), ApiError> {
    payload.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let deadline = parse_rfc3339_utc(&payload.deadline)
        .map_err(|_| ApiError::BadRequest("deadline must be an RFC3339 timestamp".to_string()))?;
    let class = require_class(&state, payload.class_id.trim()).await?;

    let project_type = state
        .store()
        .insert_project_type(&CreateProjectType {
            id: Uuid::new_v4().to_string(),
            class_id: class.id,
            name: payload.name.trim().to_string(),
            order_index: payload.order_index,
            deadline,
            max_score: payload.max_score,
            created_at: primitive_now_utc(),
        })
        .await
        .map_err(|e| ApiError::store(e, "Failed to create project type"))?;

    Ok((StatusCode::CREATED, Json(ProjectTypeResponse::from_db(project_type))))
}
