use anyhow::Context;
use uuid::Uuid;

use crate::core::security;
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::db::models::StudentHandles;
use crate::repositories::classes::CreateClass;
use crate::repositories::monitors::CreateMonitor;
use crate::repositories::project_types::CreateProjectType;
use crate::repositories::students::CreateStudent;
use crate::services::monitor_assignment::Submission;

const DEMO_MATRICULA: &str = "123";

/// Inserts a demo class with one student, two monitors, two project types and
/// two routed submissions. Skips everything once the demo student exists.
pub(crate) async fn seed_demo_data(state: &AppState) -> anyhow::Result<()> {
    let seed = state.settings().seed();
    if !seed.enabled {
        return Ok(());
    }
    if seed.student_password.is_empty() {
        tracing::warn!("SEED_STUDENT_PASSWORD not configured; skipping demo data");
        return Ok(());
    }

    let store = state.store();
    if let Some(student) = store
        .find_student_by_matricula(DEMO_MATRICULA)
        .await
        .context("Failed to look up demo student")?
    {
        let matches = security::verify_password(&seed.student_password, &student.hashed_password)
            .unwrap_or(false);
        if !matches {
            tracing::warn!("Demo student password differs from SEED_STUDENT_PASSWORD");
        }
        tracing::info!(student_id = %student.id, "Demo data already present");
        return Ok(());
    }

    let now = primitive_now_utc();
    let class = store
        .insert_class(&CreateClass {
            id: Uuid::new_v4().to_string(),
            professor_first_name: "Carla".to_string(),
            professor_last_name: "Castanho".to_string(),
            class_name: "2019".to_string(),
            address: "PJC 144".to_string(),
            year: 2019,
            season: 2,
            created_at: now,
        })
        .await
        .context("Failed to insert demo class")?;

    let hashed_password = security::hash_password(&seed.student_password)?;
    let student = store
        .insert_student(&CreateStudent {
            id: Uuid::new_v4().to_string(),
            class_id: class.id.clone(),
            first_name: "Aluno".to_string(),
            last_name: "De Apc".to_string(),
            matricula: DEMO_MATRICULA.to_string(),
            email: "aluno@unb.com.br".to_string(),
            hashed_password,
            handles: StudentHandles { codeforces: Some("Veras".to_string()) },
            created_at: now,
        })
        .await
        .context("Failed to insert demo student")?;

    for (index, (first_name, email)) in
        [("Monitor", "monitor1@unb.com.br"), ("Monitora", "monitor2@unb.com.br")]
            .into_iter()
            .enumerate()
    {
        store
            .insert_monitor(&CreateMonitor {
                id: Uuid::new_v4().to_string(),
                class_id: class.id.clone(),
                first_name: first_name.to_string(),
                last_name: "De Apc".to_string(),
                email: email.to_string(),
                created_at: now + time::Duration::milliseconds(index as i64),
            })
            .await
            .context("Failed to insert demo monitor")?;
    }

    let mut project_types = Vec::new();
    for (order_index, name) in [(1, "Trabalho 1"), (2, "Trabalho 2")] {
        let project_type = store
            .insert_project_type(&CreateProjectType {
                id: Uuid::new_v4().to_string(),
                class_id: class.id.clone(),
                name: name.to_string(),
                order_index,
                deadline: now + time::Duration::weeks(2 * i64::from(order_index)),
                max_score: 10.0,
                created_at: now,
            })
            .await
            .context("Failed to insert demo project type")?;
        project_types.push(project_type);
    }

    for (project_type, file_name) in project_types.iter().zip(["trabalho1.c", "trabalho2.c"]) {
        let assignment = state
            .assignments()
            .assign_and_record(Submission {
                class_id: class.id.clone(),
                student_id: student.id.clone(),
                project_type_id: project_type.id.clone(),
                file_name: file_name.to_string(),
                sent_at: primitive_now_utc(),
            })
            .await
            .context("Failed to route demo submission")?;
        tracing::debug!(
            project_id = %assignment.project.id,
            monitor_id = %assignment.monitor.id,
            "Demo submission routed"
        );
    }

    tracing::info!(class_id = %class.id, "Seeded demo data");
    Ok(())
}
