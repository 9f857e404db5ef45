use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::lookups::{require_class, require_project_type, require_student};
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::schemas::monitor::MonitorResponse;
use crate::schemas::project::{ProjectResponse, ProjectSendRequest, ProjectSendResponse};
use crate::services::monitor_assignment::Submission;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/send", post(send_project))
        .route("/:student_id", get(list_student_projects))
}

async fn send_project(
    State(state): State<AppState>,
    Json(payload): Json<ProjectSendRequest>,
) -> Result<(StatusCode, Json<ProjectSendResponse>), ApiError> {
    payload.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let file_name = payload.file_name.trim();
    if file_name.is_empty() {
        return Err(ApiError::BadRequest("file_name must not be empty".to_string()));
    }

    let class = require_class(&state, payload.class_id.trim()).await?;
    let student = require_student(&state, payload.student_id.trim()).await?;
    if student.class_id != class.id {
        return Err(ApiError::BadRequest("Student is not enrolled in this class".to_string()));
    }
    let project_type = require_project_type(&state, payload.project_type_id.trim()).await?;
    if project_type.class_id != class.id {
        return Err(ApiError::BadRequest(
            "Project type does not belong to this class".to_string(),
        ));
    }

    let submission = Submission {
        class_id: class.id,
        student_id: student.id,
        project_type_id: project_type.id,
        file_name: file_name.to_string(),
        sent_at: primitive_now_utc(),
    };

    // Runs detached so a dropped client connection cannot abandon the
    // engine while an assignment outcome is being verified.
    let engine = state.assignments().clone();
    let assignment = tokio::spawn(async move { engine.assign_and_record(submission).await })
        .await
        .map_err(|e| ApiError::internal(e, "Project assignment task failed"))??;

    Ok((
        StatusCode::CREATED,
        Json(ProjectSendResponse {
            monitor: MonitorResponse::from_db(assignment.monitor),
            project: ProjectResponse::from_db(assignment.project),
        }),
    ))
}

async fn list_student_projects(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<Vec<ProjectResponse>>, ApiError> {
    let projects = state.projects().list_by_student(student_id.trim()).await?;
    Ok(Json(projects.into_iter().map(ProjectResponse::from_db).collect()))
}
