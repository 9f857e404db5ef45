use sqlx::PgPool;
use time::PrimitiveDateTime;

use crate::db::models::Project;
use crate::db::types::ProjectStatus;

const COLUMNS: &str = "\
    id, student_id, project_type_id, class_id, monitor_id, sent_at, file_name, status, score, \
    created_at";

/// A project row ready for insertion. The monitor is picked at insert time,
/// never by the submitting client.
#[derive(Debug, Clone)]
pub(crate) struct CreateProject {
    pub(crate) id: String,
    pub(crate) student_id: String,
    pub(crate) project_type_id: String,
    pub(crate) class_id: String,
    pub(crate) sent_at: PrimitiveDateTime,
    pub(crate) file_name: String,
    pub(crate) status: ProjectStatus,
    pub(crate) score: f64,
    pub(crate) created_at: PrimitiveDateTime,
}

pub(crate) async fn create(
    executor: impl sqlx::PgExecutor<'_>,
    params: &CreateProject,
    monitor_id: &str,
) -> Result<Project, sqlx::Error> {
    sqlx::query_as::<_, Project>(&format!(
        "INSERT INTO projects (
            id, student_id, project_type_id, class_id, monitor_id, sent_at, file_name, status,
            score, created_at
         ) VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,$10)
         RETURNING {COLUMNS}"
    ))
    .bind(&params.id)
    .bind(&params.student_id)
    .bind(&params.project_type_id)
    .bind(&params.class_id)
    .bind(monitor_id)
    .bind(params.sent_at)
    .bind(&params.file_name)
    .bind(params.status)
    .bind(params.score)
    .bind(params.created_at)
    .fetch_one(executor)
    .await
}

pub(crate) async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(&format!("SELECT {COLUMNS} FROM projects WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub(crate) async fn list_by_student(
    pool: &PgPool,
    student_id: &str,
) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(&format!(
        "SELECT {COLUMNS} FROM projects WHERE student_id = $1 ORDER BY sent_at, id"
    ))
    .bind(student_id)
    .fetch_all(pool)
    .await
}
