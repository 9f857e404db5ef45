use sqlx::PgPool;
use time::PrimitiveDateTime;

use crate::db::models::Monitor;

pub(crate) const COLUMNS: &str = "id, class_id, first_name, last_name, email, load, created_at";

/// Least loaded first; equal loads fall back to insertion order.
const LOAD_ORDER: &str = "ORDER BY load, created_at, id";

#[derive(Debug, Clone)]
pub(crate) struct CreateMonitor {
    pub(crate) id: String,
    pub(crate) class_id: String,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) email: String,
    pub(crate) created_at: PrimitiveDateTime,
}

pub(crate) async fn create(pool: &PgPool, params: &CreateMonitor) -> Result<Monitor, sqlx::Error> {
    sqlx::query_as::<_, Monitor>(&format!(
        "INSERT INTO monitors (id, class_id, first_name, last_name, email, load, created_at)
         VALUES ($1,$2,$3,$4,$5,0,$6)
         RETURNING {COLUMNS}"
    ))
    .bind(&params.id)
    .bind(&params.class_id)
    .bind(&params.first_name)
    .bind(&params.last_name)
    .bind(&params.email)
    .bind(params.created_at)
    .fetch_one(pool)
    .await
}

pub(crate) async fn list_by_class(
    pool: &PgPool,
    class_id: &str,
) -> Result<Vec<Monitor>, sqlx::Error> {
    sqlx::query_as::<_, Monitor>(&format!(
        "SELECT {COLUMNS} FROM monitors WHERE class_id = $1 {LOAD_ORDER}"
    ))
    .bind(class_id)
    .fetch_all(pool)
    .await
}

pub(crate) async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Monitor>, sqlx::Error> {
    sqlx::query_as::<_, Monitor>(&format!("SELECT {COLUMNS} FROM monitors WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Adds one to the load of the class's least-loaded monitor and returns it
/// with the new load. Callers hold the class lock so the pick is current.
pub(crate) async fn charge_least_loaded(
    executor: impl sqlx::PgExecutor<'_>,
    class_id: &str,
) -> Result<Option<Monitor>, sqlx::Error> {
    sqlx::query_as::<_, Monitor>(&format!(
        "UPDATE monitors SET load = load + 1
         WHERE id = (SELECT id FROM monitors WHERE class_id = $1 {LOAD_ORDER} LIMIT 1)
         RETURNING {COLUMNS}"
    ))
    .bind(class_id)
    .fetch_optional(executor)
    .await
}
