use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use time::PrimitiveDateTime;

use crate::db::types::ProjectStatus;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct SchoolClass {
    pub(crate) id: String,
    pub(crate) professor_first_name: String,
    pub(crate) professor_last_name: String,
    pub(crate) class_name: String,
    pub(crate) address: String,
    pub(crate) year: i32,
    pub(crate) season: i32,
    pub(crate) created_at: PrimitiveDateTime,
}

/// Teaching assistant of a class. `load` counts the projects currently
/// assigned to them and is only ever changed by conditional updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub(crate) struct Monitor {
    pub(crate) id: String,
    pub(crate) class_id: String,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) email: String,
    pub(crate) load: i32,
    pub(crate) created_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct StudentHandles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) codeforces: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Student {
    pub(crate) id: String,
    pub(crate) class_id: String,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) matricula: String,
    pub(crate) email: String,
    pub(crate) hashed_password: String,
    pub(crate) handles: Json<StudentHandles>,
    pub(crate) created_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct ProjectType {
    pub(crate) id: String,
    pub(crate) class_id: String,
    pub(crate) name: String,
    pub(crate) order_index: i32,
    pub(crate) deadline: PrimitiveDateTime,
    pub(crate) max_score: f64,
    pub(crate) created_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub(crate) struct Project {
    pub(crate) id: String,
    pub(crate) student_id: String,
    pub(crate) project_type_id: String,
    pub(crate) class_id: String,
    pub(crate) monitor_id: String,
    pub(crate) sent_at: PrimitiveDateTime,
    pub(crate) file_name: String,
    pub(crate) status: ProjectStatus,
    pub(crate) score: f64,
    pub(crate) created_at: PrimitiveDateTime,
}
