use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::collections::HashMap;

use crate::core::metrics;
use crate::core::state::AppState;
use crate::schemas::{HealthResponse, RootResponse};

pub(crate) async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    let api = state.settings().api();
    let response = RootResponse {
        message: api.project_name.clone(),
        version: api.version.clone(),
        api_prefix: api.api_v1_str.clone(),
    };

    Json(response)
}

pub(crate) async fn healthz(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let mut components = HashMap::new();

    let (status_code, status) =
        match state.store_policy().bounded(state.store().ping()).await {
            Ok(()) => {
                components.insert("database".to_string(), "healthy".to_string());
                (StatusCode::OK, "healthy")
            }
            Err(err) => {
                tracing::warn!(error = %err, "Health check failed");
                components.insert("database".to_string(), format!("unhealthy: {err}"));
                (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
            }
        };

    let response = HealthResponse {
        service: "apc-api".to_string(),
        status: status.to_string(),
        components,
    };
    (status_code, Json(response))
}

pub(crate) async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    if !state.settings().telemetry().prometheus_enabled {
        return StatusCode::NOT_FOUND.into_response();
    }

    match metrics::render() {
        Some(body) => ([(axum::http::header::CONTENT_TYPE, "text/plain; version=0.0.4")], body)
            .into_response(),
        None => StatusCode::SERVICE_UNAVAILABLE.into_response(),
    }
}
