use sqlx::PgPool;
use time::PrimitiveDateTime;

use crate::db::models::SchoolClass;

const COLUMNS: &str = "\
    id, professor_first_name, professor_last_name, class_name, address, year, season, \
    created_at";

#[derive(Debug, Clone)]
pub(crate) struct CreateClass {
    pub(crate) id: String,
    pub(crate) professor_first_name: String,
    pub(crate) professor_last_name: String,
    pub(crate) class_name: String,
    pub(crate) address: String,
    pub(crate) year: i32,
    pub(crate) season: i32,
    pub(crate) created_at: PrimitiveDateTime,
}

pub(crate) async fn create(
    pool: &PgPool,
    params: &CreateClass,
) -> Result<SchoolClass, sqlx::Error> {
    sqlx::query_as::<_, SchoolClass>(&format!(
        "INSERT INTO classes (
            id, professor_first_name, professor_last_name, class_name, address, year, season,
            created_at
         ) VALUES ($1,$2,$3,$4,$5,$6,$7,$8)
         RETURNING {COLUMNS}"
    ))
    .bind(&params.id)
    .bind(&params.professor_first_name)
    .bind(&params.professor_last_name)
    .bind(&params.class_name)
    .bind(&params.address)
    .bind(params.year)
    .bind(params.season)
    .bind(params.created_at)
    .fetch_one(pool)
    .await
}

pub(crate) async fn find_by_id(
    pool: &PgPool,
    id: &str,
) -> Result<Option<SchoolClass>, sqlx::Error> {
    sqlx::query_as::<_, SchoolClass>(&format!("SELECT {COLUMNS} FROM classes WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Row-locks the class until the surrounding transaction ends. Returns
/// whether the class exists.
pub(crate) async fn lock_for_assignment(
    executor: impl sqlx::PgExecutor<'_>,
    class_id: &str,
) -> Result<bool, sqlx::Error> {
    let locked =
        sqlx::query_scalar::<_, String>("SELECT id FROM classes WHERE id = $1 FOR UPDATE")
            .bind(class_id)
            .fetch_optional(executor)
            .await?;

    Ok(locked.is_some())
}
