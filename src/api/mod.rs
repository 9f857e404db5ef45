pub(crate) mod classes;
pub(crate) mod errors;
pub(crate) mod handlers;
pub(crate) mod lookups;
pub(crate) mod monitors;
pub(crate) mod project_types;
pub(crate) mod projects;
pub(crate) mod router;
pub(crate) mod students;
