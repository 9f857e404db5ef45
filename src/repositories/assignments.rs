use crate::db::models::{Monitor, Project};
use crate::repositories::{classes, monitors, projects};
use crate::repositories::projects::CreateProject;

/// Charges the least-loaded monitor of the project's class and inserts the
/// project tagged with it, inside `tx`. Submissions to one class queue on the
/// class row lock; other classes are not blocked. `None` when the class is
/// unknown or has no monitors, in which case nothing was written.
pub(crate) async fn claim_and_insert(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    params: &CreateProject,
) -> Result<Option<(Monitor, Project)>, sqlx::Error> {
    if !classes::lock_for_assignment(&mut **tx, &params.class_id).await? {
        return Ok(None);
    }

    let Some(monitor) = monitors::charge_least_loaded(&mut **tx, &params.class_id).await? else {
        return Ok(None);
    };
    let project = projects::create(&mut **tx, params, &monitor.id).await?;

    Ok(Some((monitor, project)))
}
