use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::lookups::require_class;
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::repositories::classes::CreateClass;
use crate::schemas::class::{ClassCreate, ClassResponse};
use crate::schemas::monitor::MonitorResponse;
use crate::schemas::project_type::ProjectTypeResponse;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_class))
        .route("/:class_id", get(get_class))
        .route("/:class_id/monitors", get(list_class_monitors))
        .route("/:class_id/project-types", get(list_class_project_types))
}

async fn create_class(
    State(state): State<AppState>,
    Json(payload): Json<ClassCreate>,
) -> Result<(StatusCode, Json<ClassResponse>), ApiError> {
    payload.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let class = state
        .store()
        .insert_class(&CreateClass {
            id: Uuid::new_v4().to_string(),
            professor_first_name: payload.professor_first_name.trim().to_string(),
            professor_last_name: payload.professor_last_name.trim().to_string(),
            class_name: payload.class_name.trim().to_string(),
            address: payload.address.trim().to_string(),
            year: payload.year,
            season: payload.season,
            created_at: primitive_now_utc(),
        })
        .await
        .map_err(|e| ApiError::store(e, "Failed to create class"))?;

    tracing::info!(class_id = %class.id, "Class created");
    Ok((StatusCode::CREATED, Json(ClassResponse::from_db(class))))
}

async fn get_class(
    State(state): State<AppState>,
    Path(class_id): Path<String>,
) -> Result<Json<ClassResponse>, ApiError> {
    let class = require_class(&state, &class_id).await?;
    Ok(Json(ClassResponse::from_db(class)))
}

/// Monitors in assignment order: least loaded first.
async fn list_class_monitors(
    State(state): State<AppState>,
    Path(class_id): Path<String>,
) -> Result<Json<Vec<MonitorResponse>>, ApiError> {
    let class = require_class(&state, &class_id).await?;
    let monitors = state
        .store_policy()
        .read_with_retry("list_monitors_by_class", || {
            state.store().list_monitors_by_class(&class.id)
        })
        .await
        .map_err(|e| ApiError::store(e, "Failed to list monitors"))?;

    Ok(Json(monitors.into_iter().map(MonitorResponse::from_db).collect()))
}

async fn list_class_project_types(
    State(state): State<AppState>,
    Path(class_id): Path<String>,
) -> Result<Json<Vec<ProjectTypeResponse>>, ApiError> {
    let class = require_class(&state, &class_id).await?;
    let project_types = state
        .store_policy()
        .read_with_retry("list_project_types_by_class", || {
            state.store().list_project_types_by_class(&class.id)
        })
        .await
        .map_err(|e| ApiError::store(e, "Failed to list project types"))?;

    Ok(Json(project_types.into_iter().map(ProjectTypeResponse::from_db).collect()))
}
