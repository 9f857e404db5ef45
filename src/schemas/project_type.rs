use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::time::format_primitive;
use crate::db::models::ProjectType;

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct ProjectTypeCreate {
    #[serde(alias = "classID", alias = "classId")]
    #[validate(length(min = 1, message = "class_id must not be empty"))]
    pub(crate) class_id: String,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub(crate) name: String,
    #[serde(alias = "order")]
    #[validate(range(min = 0, message = "order_index must be non-negative"))]
    pub(crate) order_index: i32,
    /// RFC3339 timestamp; stored as naive UTC.
    pub(crate) deadline: String,
    #[serde(alias = "score")]
    #[validate(range(min = 0.0, message = "max_score must be non-negative"))]
    pub(crate) max_score: f64,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProjectTypeResponse {
    pub(crate) id: String,
    pub(crate) class_id: String,
    pub(crate) name: String,
    pub(crate) order_index: i32,
    pub(crate) deadline: String,
    pub(crate) max_score: f64,
}

impl ProjectTypeResponse {
    pub(crate) fn from_db(project_type: ProjectType) -> Self {
        Self {
            id: project_type.id,
            class_id: project_type.class_id,
            name: project_type.name,
            order_index: project_type.order_index,
            deadline: format_primitive(project_type.deadline),
            max_score: project_type.max_score,
        }
    }
}
