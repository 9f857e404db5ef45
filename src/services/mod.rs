pub(crate) mod monitor_assignment;
pub(crate) mod project_queries;
pub(crate) mod store_policy;
