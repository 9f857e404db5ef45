//! Least-loaded monitor assignment.
//!
//! A submission is charged to the monitor of its class with the smallest
//! load. Picking the monitor, charging it and recording the project run as
//! one store transaction that is serialized per class, so concurrent
//! submissions never observe the same load and a failed write leaves
//! nothing behind. Only a write whose outcome is unknown needs follow-up:
//! the project is looked up by id and, if it cannot be found, the failure
//! is reported for reconciliation instead of guessing.

use std::sync::Arc;

use thiserror::Error;
use time::PrimitiveDateTime;
use uuid::Uuid;

use crate::core::metrics;
use crate::core::time::primitive_now_utc;
use crate::db::models::{Monitor, Project};
use crate::db::types::ProjectStatus;
use crate::repositories::projects::CreateProject;
use crate::services::store_policy::StorePolicy;
use crate::store::{Store, StoreError};

/// A validated project submission waiting for a monitor.
#[derive(Debug, Clone)]
pub(crate) struct Submission {
    pub(crate) class_id: String,
    pub(crate) student_id: String,
    pub(crate) project_type_id: String,
    pub(crate) file_name: String,
    pub(crate) sent_at: PrimitiveDateTime,
}

/// The chosen monitor, with its load after the claim, and the recorded project.
#[derive(Debug, Clone)]
pub(crate) struct Assignment {
    pub(crate) monitor: Monitor,
    pub(crate) project: Project,
}

#[derive(Debug, Error)]
pub(crate) enum AssignmentError {
    #[error("class {class_id} has no monitors")]
    NoEligibleMonitor { class_id: String },
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("project {project_id} in class {class_id} may be partially recorded: {reason}")]
    PartialWriteFailure { class_id: String, project_id: String, reason: String },
}

impl AssignmentError {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::NoEligibleMonitor { .. } => "no_eligible_monitor",
            Self::StoreUnavailable(_) => "store_unavailable",
            Self::PartialWriteFailure { .. } => "partial_write_failure",
        }
    }
}

#[derive(Clone)]
pub(crate) struct MonitorAssignmentEngine {
    store: Arc<dyn Store>,
    policy: StorePolicy,
}

impl MonitorAssignmentEngine {
    pub(crate) fn new(store: Arc<dyn Store>, policy: StorePolicy) -> Self {
        Self { store, policy }
    }

    /// Picks the least-loaded monitor of the submission's class, charges it
    /// and records the project. Either both writes land or neither does.
    pub(crate) async fn assign_and_record(
        &self,
        submission: Submission,
    ) -> Result<Assignment, AssignmentError> {
        let result = self.assign(&submission).await;
        metrics::record_assignment(match &result {
            Ok(_) => "assigned",
            Err(err) => err.kind(),
        });
        result
    }

    async fn assign(&self, submission: &Submission) -> Result<Assignment, AssignmentError> {
        let class_id = submission.class_id.as_str();
        let record = CreateProject {
            id: Uuid::new_v4().to_string(),
            student_id: submission.student_id.clone(),
            project_type_id: submission.project_type_id.clone(),
            class_id: submission.class_id.clone(),
            sent_at: submission.sent_at,
            file_name: submission.file_name.clone(),
            status: ProjectStatus::Pending,
            score: 0.0,
            created_at: primitive_now_utc(),
        };

        match self.policy.bounded(self.store.assign_to_least_loaded(&record)).await {
            Ok(Some((monitor, project))) => {
                tracing::info!(
                    project_id = %project.id,
                    monitor_id = %monitor.id,
                    class_id,
                    load = monitor.load,
                    "Project assigned to monitor"
                );
                Ok(Assignment { monitor, project })
            }
            Ok(None) => {
                Err(AssignmentError::NoEligibleMonitor { class_id: class_id.to_string() })
            }
            Err(err) if err.outcome_unknown() => self.verify_unknown_outcome(&record, err).await,
            Err(err) => {
                tracing::warn!(class_id, error = %err, "Monitor assignment rolled back");
                Err(AssignmentError::StoreUnavailable(format!(
                    "failed to assign a monitor: {err}"
                )))
            }
        }
    }

    /// The assignment may or may not have committed. Keeps it if the project
    /// is there; otherwise nothing is undone, since a late commit would then
    /// leave a project without its load.
    async fn verify_unknown_outcome(
        &self,
        record: &CreateProject,
        assign_err: StoreError,
    ) -> Result<Assignment, AssignmentError> {
        tracing::warn!(
            project_id = %record.id,
            class_id = %record.class_id,
            error = %assign_err,
            "Monitor assignment has an unknown outcome; verifying"
        );

        let partial = |reason: String| {
            tracing::error!(
                project_id = %record.id,
                class_id = %record.class_id,
                reason = %reason,
                "Monitor assignment needs reconciliation"
            );
            AssignmentError::PartialWriteFailure {
                class_id: record.class_id.clone(),
                project_id: record.id.clone(),
                reason,
            }
        };

        let project = match self
            .policy
            .read_with_retry("find_project", || self.store.find_project(&record.id))
            .await
        {
            Ok(Some(project)) => project,
            Ok(None) => {
                return Err(partial(format!("assignment outcome unknown ({assign_err})")));
            }
            Err(verify_err) => {
                return Err(partial(format!(
                    "assignment outcome unknown ({assign_err}); verification failed ({verify_err})"
                )));
            }
        };

        match self
            .policy
            .read_with_retry("find_monitor", || self.store.find_monitor(&project.monitor_id))
            .await
        {
            Ok(Some(monitor)) => {
                tracing::info!(
                    project_id = %project.id,
                    monitor_id = %monitor.id,
                    "Monitor assignment was committed despite the error"
                );
                Ok(Assignment { monitor, project })
            }
            Ok(None) => Err(partial(format!(
                "project recorded but monitor {} is missing",
                project.monitor_id
            ))),
            Err(read_err) => Err(partial(format!(
                "project recorded but its monitor could not be read ({read_err})"
            ))),
        }
    }
}
