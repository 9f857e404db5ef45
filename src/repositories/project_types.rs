use sqlx::PgPool;
use time::PrimitiveDateTime;

use crate::db::models::ProjectType;

const COLUMNS: &str = "id, class_id, name, order_index, deadline, max_score, created_at";

#[derive(Debug, Clone)]
pub(crate) struct CreateProjectType {
    pub(crate) id: String,
    pub(crate) class_id: String,
    pub(crate) name: String,
    pub(crate) order_index: i32,
    pub(crate) deadline: PrimitiveDateTime,
    pub(crate) max_score: f64,
    pub(crate) created_at: PrimitiveDateTime,
}

pub(crate) async fn create(
    pool: &PgPool,
    params: &CreateProjectType,
) -> Result<ProjectType, sqlx::Error> {
    sqlx::query_as::<_, ProjectType>(&format!(
        "INSERT INTO project_types
         (id, class_id, name, order_index, deadline, max_score, created_at)
         VALUES ($1,$2,$3,$4,$5,$6,$7)
         RETURNING {COLUMNS}"
    ))
    .bind(&params.id)
    .bind(&params.class_id)
    .bind(&params.name)
    .bind(params.order_index)
    .bind(params.deadline)
    .bind(params.max_score)
    .bind(params.created_at)
    .fetch_one(pool)
    .await
}

pub(crate) async fn find_by_id(
    pool: &PgPool,
    id: &str,
) -> Result<Option<ProjectType>, sqlx::Error> {
    sqlx::query_as::<_, ProjectType>(&format!("SELECT {COLUMNS} FROM project_types WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub(crate) async fn list_by_class(
    pool: &PgPool,
    class_id: &str,
) -> Result<Vec<ProjectType>, sqlx::Error> {
    sqlx::query_as::<_, ProjectType>(&format!(
        "SELECT {COLUMNS} FROM project_types WHERE class_id = $1 ORDER BY order_index, created_at"
    ))
    .bind(class_id)
    .fetch_all(pool)
    .await
}
