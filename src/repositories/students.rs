use sqlx::types::Json;
use sqlx::PgPool;
use time::PrimitiveDateTime;

use crate::db::models::{Student, StudentHandles};

const COLUMNS: &str = "\
    id, class_id, first_name, last_name, matricula, email, hashed_password, handles, created_at";

#[derive(Debug, Clone)]
pub(crate) struct CreateStudent {
    pub(crate) id: String,
    pub(crate) class_id: String,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) matricula: String,
    pub(crate) email: String,
    pub(crate) hashed_password: String,
    pub(crate) handles: StudentHandles,
    pub(crate) created_at: PrimitiveDateTime,
}

pub(crate) async fn create(pool: &PgPool, params: &CreateStudent) -> Result<Student, sqlx::Error> {
    sqlx::query_as::<_, Student>(&format!(
        "INSERT INTO students (
            id, class_id, first_name, last_name, matricula, email, hashed_password, handles,
            created_at
         ) VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9)
         RETURNING {COLUMNS}"
    ))
    .bind(&params.id)
    .bind(&params.class_id)
    .bind(&params.first_name)
    .bind(&params.last_name)
    .bind(&params.matricula)
    .bind(&params.email)
    .bind(&params.hashed_password)
    .bind(Json(&params.handles))
    .bind(params.created_at)
    .fetch_one(pool)
    .await
}

pub(crate) async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Student>, sqlx::Error> {
    sqlx::query_as::<_, Student>(&format!("SELECT {COLUMNS} FROM students WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub(crate) async fn find_by_matricula(
    pool: &PgPool,
    matricula: &str,
) -> Result<Option<Student>, sqlx::Error> {
    sqlx::query_as::<_, Student>(&format!("SELECT {COLUMNS} FROM students WHERE matricula = $1"))
        .bind(matricula)
        .fetch_optional(pool)
        .await
}
