use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use uuid::Uuid;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::lookups::require_class;
use crate::core::security;
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::repositories::students::CreateStudent;
use crate::schemas::student::{StudentCreate, StudentResponse};

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/", post(create_student))
}

async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<StudentCreate>,
) -> Result<(StatusCode, Json<StudentResponse>), ApiError> {
    payload.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let class = require_class(&state, payload.class_id.trim()).await?;

    let hashed_password = security::hash_password(&payload.password)
        .map_err(|e| ApiError::internal(e, "Failed to hash password"))?;

    let student = state
        .store()
        .insert_student(&CreateStudent {
            id: Uuid::new_v4().to_string(),
            class_id: class.id,
            first_name: payload.first_name.trim().to_string(),
            last_name: payload.last_name.trim().to_string(),
            matricula: payload.matricula.trim().to_string(),
            email: payload.email.trim().to_lowercase(),
            hashed_password,
            handles: payload.handles,
            created_at: primitive_now_utc(),
        })
        .await
        .map_err(|e| ApiError::store(e, "Failed to create student"))?;

    tracing::info!(student_id = %student.id, class_id = %student.class_id, "Student created");
    Ok((StatusCode::CREATED, Json(StudentResponse::from_db(student))))
}
