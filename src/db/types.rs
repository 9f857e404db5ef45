use serde::{Deserialize, Serialize};
use sqlx::Type;

/// Grading state of a submitted project. New submissions always start as
/// `Pending`; `Graded` is written by the grading flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "projectstatus", rename_all = "lowercase")]
pub(crate) enum ProjectStatus {
    #[default]
    Pending,
    Graded,
}
