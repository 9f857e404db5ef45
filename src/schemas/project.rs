use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::time::format_primitive;
use crate::db::models::Project;
use crate::db::types::ProjectStatus;
use crate::schemas::monitor::MonitorResponse;

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct ProjectSendRequest {
    #[serde(alias = "studentID", alias = "studentId")]
    #[validate(length(min = 1, message = "student_id must not be empty"))]
    pub(crate) student_id: String,
    #[serde(alias = "projectTypeID", alias = "projectTypeId")]
    #[validate(length(min = 1, message = "project_type_id must not be empty"))]
    pub(crate) project_type_id: String,
    #[serde(alias = "classID", alias = "classId")]
    #[validate(length(min = 1, message = "class_id must not be empty"))]
    pub(crate) class_id: String,
    #[serde(alias = "fileName")]
    #[validate(length(min = 1, max = 255, message = "file_name must be 1-255 characters"))]
    pub(crate) file_name: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProjectResponse {
    pub(crate) id: String,
    pub(crate) student_id: String,
    pub(crate) project_type_id: String,
    pub(crate) class_id: String,
    pub(crate) monitor_id: String,
    pub(crate) sent_at: String,
    pub(crate) file_name: String,
    pub(crate) status: ProjectStatus,
    pub(crate) score: f64,
}

impl ProjectResponse {
    pub(crate) fn from_db(project: Project) -> Self {
        Self {
            id: project.id,
            student_id: project.student_id,
            project_type_id: project.project_type_id,
            class_id: project.class_id,
            monitor_id: project.monitor_id,
            sent_at: format_primitive(project.sent_at),
            file_name: project.file_name,
            status: project.status,
            score: project.score,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ProjectSendResponse {
    pub(crate) monitor: MonitorResponse,
    pub(crate) project: ProjectResponse,
}
