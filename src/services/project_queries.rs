use std::sync::Arc;

use thiserror::Error;

use crate::db::models::Project;
use crate::services::store_policy::StorePolicy;
use crate::store::{Store, StoreError};

#[derive(Debug, Error)]
pub(crate) enum QueryError {
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
}

#[derive(Clone)]
pub(crate) struct ProjectQueryService {
    store: Arc<dyn Store>,
    policy: StorePolicy,
}

impl ProjectQueryService {
    pub(crate) fn new(store: Arc<dyn Store>, policy: StorePolicy) -> Self {
        Self { store, policy }
    }

    /// Every project the student has submitted, oldest first. An unknown
    /// student simply has no projects.
    pub(crate) async fn list_by_student(
        &self,
        student_id: &str,
    ) -> Result<Vec<Project>, QueryError> {
        let projects = self
            .policy
            .read_with_retry("list_projects_by_student", || {
                self.store.list_projects_by_student(student_id)
            })
            .await
            .map_err(|err| {
                tracing::warn!(student_id, error = %err, "Failed to list student projects");
                err
            })?;

        Ok(projects)
    }
}
