use crate::api::errors::ApiError;
use crate::core::state::AppState;
use crate::db::models::{ProjectType, SchoolClass, Student};

pub(crate) async fn require_class(
    state: &AppState,
    class_id: &str,
) -> Result<SchoolClass, ApiError> {
    state
        .store_policy()
        .read_with_retry("find_class", || state.store().find_class(class_id))
        .await
        .map_err(|e| ApiError::store(e, "Failed to fetch class"))?
        .ok_or_else(|| ApiError::NotFound("Class not found".to_string()))
}

pub(crate) async fn require_student(
    state: &AppState,
    student_id: &str,
) -> Result<Student, ApiError> {
    state
        .store_policy()
        .read_with_retry("find_student", || state.store().find_student(student_id))
        .await
        .map_err(|e| ApiError::store(e, "Failed to fetch student"))?
        .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))
}

pub(crate) async fn require_project_type(
    state: &AppState,
    project_type_id: &str,
) -> Result<ProjectType, ApiError> {
    state
        .store_policy()
        .read_with_retry("find_project_type", || state.store().find_project_type(project_type_id))
        .await
        .map_err(|e| ApiError::store(e, "Failed to fetch project type"))?
        .ok_or_else(|| ApiError::NotFound("Project type not found".to_string()))
}
