use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::time::format_primitive;
use crate::db::models::Monitor;

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct MonitorCreate {
    #[serde(alias = "classID", alias = "classId")]
    #[validate(length(min = 1, message = "class_id must not be empty"))]
    pub(crate) class_id: String,
    #[serde(alias = "firstName")]
    #[validate(length(min = 1, message = "first_name must not be empty"))]
    pub(crate) first_name: String,
    #[serde(alias = "lastName")]
    #[validate(length(min = 1, message = "last_name must not be empty"))]
    pub(crate) last_name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub(crate) email: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct MonitorResponse {
    pub(crate) id: String,
    pub(crate) class_id: String,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) email: String,
    pub(crate) load: i32,
    pub(crate) created_at: String,
}

impl MonitorResponse {
    pub(crate) fn from_db(monitor: Monitor) -> Self {
        Self {
            id: monitor.id,
            class_id: monitor.class_id,
            first_name: monitor.first_name,
            last_name: monitor.last_name,
            email: monitor.email,
            load: monitor.load,
            created_at: format_primitive(monitor.created_at),
        }
    }
}
