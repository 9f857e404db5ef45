//! Typed repository seam between the domain services and the database.
//!
//! Each entity gets its own trait, limited to the find/insert calls the
//! services actually make, plus one for the transactional monitor
//! assignment. [`Store`] bundles them so handlers and services can hold a
//! single `Arc<dyn Store>`.

mod postgres;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::db::models::{Monitor, Project, ProjectType, SchoolClass, Student};
use crate::repositories::classes::CreateClass;
use crate::repositories::monitors::CreateMonitor;
use crate::repositories::project_types::CreateProjectType;
use crate::repositories::projects::CreateProject;
use crate::repositories::students::CreateStudent;

pub(crate) use postgres::PgStore;

#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("database error: {0}")]
    Database(sqlx::Error),
    #[error("duplicate record: {0}")]
    Conflict(String),
    #[error("store call timed out after {0:?}")]
    Timeout(Duration),
    /// The call failed before anything could be applied.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// True when the call may have been applied even though it reported an
    /// error, e.g. the connection dropped after the statement was sent.
    pub(crate) fn outcome_unknown(&self) -> bool {
        match self {
            Self::Timeout(_) => true,
            Self::Database(
                sqlx::Error::Io(_)
                | sqlx::Error::Tls(_)
                | sqlx::Error::Protocol(_)
                | sqlx::Error::WorkerCrashed,
            ) => true,
            _ => false,
        }
    }

    /// For failures of a transaction that never reached `COMMIT`: the server
    /// discards its work, so even a dropped connection leaves nothing behind.
    pub(crate) fn rolled_back(error: sqlx::Error) -> Self {
        match Self::from(error) {
            err if err.outcome_unknown() => {
                Self::Unavailable(format!("transaction aborted: {err}"))
            }
            err => err,
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
                Self::Conflict(db_error.message().to_string())
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                Self::Unavailable(error.to_string())
            }
            _ => Self::Database(error),
        }
    }
}

#[async_trait]
pub(crate) trait ClassRepository: Send + Sync {
    async fn insert_class(&self, class: &CreateClass) -> Result<SchoolClass, StoreError>;

    async fn find_class(&self, class_id: &str) -> Result<Option<SchoolClass>, StoreError>;
}

#[async_trait]
pub(crate) trait MonitorRepository: Send + Sync {
    async fn insert_monitor(&self, monitor: &CreateMonitor) -> Result<Monitor, StoreError>;

    /// Monitors of a class ordered by ascending load, ties in insertion order.
    async fn list_monitors_by_class(&self, class_id: &str) -> Result<Vec<Monitor>, StoreError>;

    async fn find_monitor(&self, id: &str) -> Result<Option<Monitor>, StoreError>;
}

#[async_trait]
pub(crate) trait AssignmentRepository: Send + Sync {
    /// Charges the least-loaded monitor of the project's class and records
    /// the project against it as one unit, serialized per class. Returns the
    /// monitor with its new load, or `None` when the class has no monitors.
    ///
    /// On error nothing was written, unless [`StoreError::outcome_unknown`]
    /// holds; then both writes either landed together or not at all.
    async fn assign_to_least_loaded(
        &self,
        project: &CreateProject,
    ) -> Result<Option<(Monitor, Project)>, StoreError>;
}

#[async_trait]
pub(crate) trait ProjectTypeRepository: Send + Sync {
    async fn insert_project_type(
        &self,
        project_type: &CreateProjectType,
    ) -> Result<ProjectType, StoreError>;

    async fn find_project_type(&self, id: &str) -> Result<Option<ProjectType>, StoreError>;

    async fn list_project_types_by_class(
        &self,
        class_id: &str,
    ) -> Result<Vec<ProjectType>, StoreError>;
}

#[async_trait]
pub(crate) trait StudentRepository: Send + Sync {
    async fn insert_student(&self, student: &CreateStudent) -> Result<Student, StoreError>;

    async fn find_student(&self, id: &str) -> Result<Option<Student>, StoreError>;

    async fn find_student_by_matricula(
        &self,
        matricula: &str,
    ) -> Result<Option<Student>, StoreError>;
}

#[async_trait]
pub(crate) trait ProjectRepository: Send + Sync {
    async fn find_project(&self, id: &str) -> Result<Option<Project>, StoreError>;

    async fn list_projects_by_student(&self, student_id: &str) -> Result<Vec<Project>, StoreError>;
}

#[async_trait]
pub(crate) trait Store:
    ClassRepository
    + MonitorRepository
    + AssignmentRepository
    + ProjectTypeRepository
    + StudentRepository
    + ProjectRepository
    + Send
    + Sync
{
    async fn ping(&self) -> Result<(), StoreError>;
}
