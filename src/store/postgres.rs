use async_trait::async_trait;
use sqlx::PgPool;

use super::{
    AssignmentRepository, ClassRepository, MonitorRepository, ProjectRepository,
    ProjectTypeRepository, Store, StoreError, StudentRepository,
};
use crate::db::models::{Monitor, Project, ProjectType, SchoolClass, Student};
use crate::repositories;
use crate::repositories::classes::CreateClass;
use crate::repositories::monitors::CreateMonitor;
use crate::repositories::project_types::CreateProjectType;
use crate::repositories::projects::CreateProject;
use crate::repositories::students::CreateStudent;

/// [`Store`] backed by the Postgres pool. Every method is a single statement
/// except the assignment, which runs as one transaction.
#[derive(Clone)]
pub(crate) struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClassRepository for PgStore {
    async fn insert_class(&self, class: &CreateClass) -> Result<SchoolClass, StoreError> {
        Ok(repositories::classes::create(&self.pool, class).await?)
    }

    async fn find_class(&self, class_id: &str) -> Result<Option<SchoolClass>, StoreError> {
        Ok(repositories::classes::find_by_id(&self.pool, class_id).await?)
    }
}

#[async_trait]
impl MonitorRepository for PgStore {
    async fn insert_monitor(&self, monitor: &CreateMonitor) -> Result<Monitor, StoreError> {
        Ok(repositories::monitors::create(&self.pool, monitor).await?)
    }

    async fn list_monitors_by_class(&self, class_id: &str) -> Result<Vec<Monitor>, StoreError> {
        Ok(repositories::monitors::list_by_class(&self.pool, class_id).await?)
    }

    async fn find_monitor(&self, id: &str) -> Result<Option<Monitor>, StoreError> {
        Ok(repositories::monitors::find_by_id(&self.pool, id).await?)
    }
}

#[async_trait]
impl AssignmentRepository for PgStore {
    async fn assign_to_least_loaded(
        &self,
        project: &CreateProject,
    ) -> Result<Option<(Monitor, Project)>, StoreError> {
        let mut tx = self.pool.begin().await.map_err(StoreError::rolled_back)?;
        let assigned = repositories::assignments::claim_and_insert(&mut tx, project)
            .await
            .map_err(StoreError::rolled_back)?;

        match assigned {
            Some(assigned) => {
                // Only a failed COMMIT can leave the outcome in doubt.
                tx.commit().await?;
                Ok(Some(assigned))
            }
            None => {
                tx.rollback().await.map_err(StoreError::rolled_back)?;
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl ProjectTypeRepository for PgStore {
    async fn insert_project_type(
        &self,
        project_type: &CreateProjectType,
    ) -> Result<ProjectType, StoreError> {
        Ok(repositories::project_types::create(&self.pool, project_type).await?)
    }

    async fn find_project_type(&self, id: &str) -> Result<Option<ProjectType>, StoreError> {
        Ok(repositories::project_types::find_by_id(&self.pool, id).await?)
    }

    async fn list_project_types_by_class(
        &self,
        class_id: &str,
    ) -> Result<Vec<ProjectType>, StoreError> {
        Ok(repositories::project_types::list_by_class(&self.pool, class_id).await?)
    }
}

#[async_trait]
impl StudentRepository for PgStore {
    async fn insert_student(&self, student: &CreateStudent) -> Result<Student, StoreError> {
        Ok(repositories::students::create(&self.pool, student).await?)
    }

    async fn find_student(&self, id: &str) -> Result<Option<Student>, StoreError> {
        Ok(repositories::students::find_by_id(&self.pool, id).await?)
    }

    async fn find_student_by_matricula(
        &self,
        matricula: &str,
    ) -> Result<Option<Student>, StoreError> {
        Ok(repositories::students::find_by_matricula(&self.pool, matricula).await?)
    }
}

#[async_trait]
impl ProjectRepository for PgStore {
    async fn find_project(&self, id: &str) -> Result<Option<Project>, StoreError> {
        Ok(repositories::projects::find_by_id(&self.pool, id).await?)
    }

    async fn list_projects_by_student(&self, student_id: &str) -> Result<Vec<Project>, StoreError> {
        Ok(repositories::projects::list_by_student(&self.pool, student_id).await?)
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(repositories::health::ping(&self.pool).await?)
    }
}
