use tracing::{error, info};

use crate::email::{application_notification, Mailer};
use crate::errors::AppError;
use crate::models::{Application, Job, NewApplication, User};
use crate::store::Store;

/// Applies the user to every active job in the collection.
///
/// Per job: create the application, bump the job's counter, notify the
/// employer, mark the notification sent. A failure at any step is logged
/// with the job id and the loop moves on, so a partial run leaves the
/// applications it managed to create in place with no rollback. There is
/// no dedup against existing applications either; calling this twice
/// doubles up. Returns the applications whose steps all completed.
pub async fn auto_apply_all(
    store: &dyn Store,
    mailer: &dyn Mailer,
    user: &User,
    resume_id: i64,
) -> Vec<Application> {
    let jobs = store.list_jobs().await;
    let mut applications = Vec::new();

    for job in jobs {
        if job.status != "active" {
            continue;
        }

        let job_id = job.id;
        match apply_to_job(store, mailer, user, &job, resume_id).await {
            Ok(application) => applications.push(application),
            Err(e) => error!("Failed to apply for job {job_id}: {e}"),
        }
    }

    info!(
        "Auto-apply for user {} created {} applications",
        user.username,
        applications.len()
    );
    applications
}

/// One iteration of the workflow: application, counter, notification.
/// Listings with no posting user (ingested ones) skip the notification.
async fn apply_to_job(
    store: &dyn Store,
    mailer: &dyn Mailer,
    user: &User,
    job: &Job,
    resume_id: i64,
) -> Result<Application, AppError> {
    let application = store
        .create_application(NewApplication {
            user_id: user.id,
            job_id: job.id,
            resume_id,
        })
        .await;

    store.increment_job_applications(job.id).await?;

    let employer = match job.user_id {
        Some(employer_id) => store.get_user(employer_id).await,
        None => None,
    };
    if let Some(employer) = employer {
        mailer
            .send(&application_notification(
                &employer.email,
                &job.title,
                &user.username,
            ))
            .await
            .map_err(|e| AppError::Email(e.to_string()))?;
        store.mark_application_email_sent(application.id).await?;
    }

    Ok(application)
}
