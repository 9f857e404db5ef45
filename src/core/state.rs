use std::sync::Arc;

use crate::core::config::Settings;
use crate::services::monitor_assignment::MonitorAssignmentEngine;
use crate::services::project_queries::ProjectQueryService;
use crate::services::store_policy::StorePolicy;
use crate::store::Store;

#[derive(Clone)]
pub(crate) struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    settings: Settings,
    store: Arc<dyn Store>,
    store_policy: StorePolicy,
    assignments: MonitorAssignmentEngine,
    projects: ProjectQueryService,
}

impl AppState {
    pub(crate) fn new(settings: Settings, store: Arc<dyn Store>) -> Self {
        let store_policy = StorePolicy::from_settings(&settings);
        let assignments = MonitorAssignmentEngine::new(store.clone(), store_policy);
        let projects = ProjectQueryService::new(store.clone(), store_policy);

        Self {
            inner: Arc::new(InnerState { settings, store, store_policy, assignments, projects }),
        }
    }

    pub(crate) fn settings(&self) -> &Settings {
        &self.inner.settings
    }

    pub(crate) fn store(&self) -> &dyn Store {
        self.inner.store.as_ref()
    }

    pub(crate) fn store_policy(&self) -> &StorePolicy {
        &self.inner.store_policy
    }

    pub(crate) fn assignments(&self) -> &MonitorAssignmentEngine {
        &self.inner.assignments
    }

    pub(crate) fn projects(&self) -> &ProjectQueryService {
        &self.inner.projects
    }
}
