use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use uuid::Uuid;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::lookups::require_class;
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::repositories::monitors::CreateMonitor;
use crate::schemas::monitor::{MonitorCreate, MonitorResponse};

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/", post(create_monitor))
}

async fn create_monitor(
    State(state): State<AppState>,
    Json(payload): Json<MonitorCreate>,
) -> Result<(StatusCode, Json<MonitorResponse>), ApiError> {
    payload.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let class = require_class(&state, payload.class_id.trim()).await?;

    let monitor = state
        .store()
        .insert_monitor(&CreateMonitor {
            id: Uuid::new_v4().to_string(),
            class_id: class.id,
            first_name: payload.first_name.trim().to_string(),
            last_name: payload.last_name.trim().to_string(),
            email: payload.email.trim().to_lowercase(),
            created_at: primitive_now_utc(),
        })
        .await
        .map_err(|e| ApiError::store(e, "Failed to create monitor"))?;

    tracing::info!(monitor_id = %monitor.id, class_id = %monitor.class_id, "Monitor created");
    Ok((StatusCode::CREATED, Json(MonitorResponse::from_db(monitor))))
}
