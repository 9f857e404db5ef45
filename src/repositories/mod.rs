pub(crate) mod assignments;
pub(crate) mod classes;
pub(crate) mod health;
pub(crate) mod monitors;
pub(crate) mod project_types;
pub(crate) mod projects;
pub(crate) mod students;
