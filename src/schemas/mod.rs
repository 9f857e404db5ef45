use std::collections::HashMap;

use serde::Serialize;

pub(crate) mod class;
pub(crate) mod monitor;
pub(crate) mod project;
pub(crate) mod project_type;
pub(crate) mod student;

#[derive(Debug, Serialize)]
pub(crate) struct HealthResponse {
    pub(crate) service: String,
    pub(crate) status: String,
    pub(crate) components: HashMap<String, String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RootResponse {
    pub(crate) message: String,
    pub(crate) version: String,
    pub(crate) api_prefix: String,
}
