pub(crate) mod models;
pub(crate) mod types;

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};

use crate::core::config::Settings;

pub(crate) async fn init_pool(settings: &Settings) -> Result<PgPool, sqlx::Error> {
    let database = settings.database();
    let connect_options: PgConnectOptions = database.database_url().parse()?;
    // Writes are bounded server side so an expired statement is rolled back
    // rather than left in an unknown state. Waiting on a class lock gives up
    // well before the client deadline, which keeps that failure a clean rollback.
    let store_timeout_ms = settings.assignment().store_timeout_ms;
    let connect_options = connect_options
        .application_name("apc-api")
        .options([
            ("statement_timeout", format!("{store_timeout_ms}ms")),
            ("lock_timeout", format!("{}ms", (store_timeout_ms / 2).max(1))),
            ("idle_in_transaction_session_timeout", format!("{store_timeout_ms}ms")),
        ])
        .disable_statement_logging();

    PgPoolOptions::new()
        .max_connections(database.max_connections)
        .min_connections(1)
        .acquire_timeout(settings.assignment().store_timeout().max(Duration::from_secs(5)))
        .test_before_acquire(true)
        .connect_with(connect_options)
        .await
}

pub(crate) async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
