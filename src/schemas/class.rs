use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::time::format_primitive;
use crate::db::models::SchoolClass;

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct ClassCreate {
    #[serde(alias = "professorFirstName")]
    #[validate(length(min = 1, message = "professor_first_name must not be empty"))]
    pub(crate) professor_first_name: String,
    #[serde(alias = "professorLastName")]
    #[validate(length(min = 1, message = "professor_last_name must not be empty"))]
    pub(crate) professor_last_name: String,
    #[serde(alias = "className")]
    #[validate(length(min = 1, message = "class_name must not be empty"))]
    pub(crate) class_name: String,
    #[serde(default)]
    pub(crate) address: String,
    #[validate(range(min = 1900, max = 2200, message = "year is out of range"))]
    pub(crate) year: i32,
    #[validate(range(min = 1, message = "season must be positive"))]
    pub(crate) season: i32,
}

#[derive(Debug, Serialize)]
pub(crate) struct ClassResponse {
    pub(crate) id: String,
    pub(crate) professor_first_name: String,
    pub(crate) professor_last_name: String,
    pub(crate) class_name: String,
    pub(crate) address: String,
    pub(crate) year: i32,
    pub(crate) season: i32,
    pub(crate) created_at: String,
}

impl ClassResponse {
    pub(crate) fn from_db(class: SchoolClass) -> Self {
        Self {
            id: class.id,
            professor_first_name: class.professor_first_name,
            professor_last_name: class.professor_last_name,
            class_name: class.class_name,
            address: class.address,
            year: class.year,
            season: class.season,
            created_at: format_primitive(class.created_at),
        }
    }
}
