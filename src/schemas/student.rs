use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::time::format_primitive;
use crate::db::models::{Student, StudentHandles};

pub(crate) const MIN_PASSWORD_LEN: u64 = 8;

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct StudentCreate {
    #[serde(alias = "classID", alias = "classId")]
    #[validate(length(min = 1, message = "class_id must not be empty"))]
    pub(crate) class_id: String,
    #[serde(alias = "firstName")]
    #[validate(length(min = 1, message = "first_name must not be empty"))]
    pub(crate) first_name: String,
    #[serde(alias = "lastName")]
    #[validate(length(min = 1, message = "last_name must not be empty"))]
    pub(crate) last_name: String,
    #[validate(length(min = 1, max = 32, message = "matricula must be 1-32 characters"))]
    pub(crate) matricula: String,
    #[validate(email(message = "email must be a valid address"))]
    pub(crate) email: String,
    #[validate(length(min = MIN_PASSWORD_LEN, message = "password must be at least 8 characters"))]
    pub(crate) password: String,
    #[serde(default)]
    pub(crate) handles: StudentHandles,
}

/// Student without credentials.
#[derive(Debug, Serialize)]
pub(crate) struct StudentResponse {
    pub(crate) id: String,
    pub(crate) class_id: String,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) matricula: String,
    pub(crate) email: String,
    pub(crate) handles: StudentHandles,
    pub(crate) created_at: String,
}

impl StudentResponse {
    pub(crate) fn from_db(student: Student) -> Self {
        Self {
            id: student.id,
            class_id: student.class_id,
            first_name: student.first_name,
            last_name: student.last_name,
            matricula: student.matricula,
            email: student.email,
            handles: student.handles.0,
            created_at: format_primitive(student.created_at),
        }
    }
}
