use crate::models::{Job, JobPreferences};

/// Filters the job list against a seeker's stored preferences.
///
/// A job passes when its status is `active`, any preferred title is a
/// case-insensitive substring of the job title (or no title filter is
/// set), and its location is in the allowed set (or no location filter
/// is set). No ranking and no pagination; callers get the subset in
/// listing order.
pub fn matching_jobs(jobs: Vec<Job>, prefs: &JobPreferences) -> Vec<Job> {
    jobs.into_iter()
        .filter(|job| job_matches(job, prefs))
        .collect()
}

fn job_matches(job: &Job, prefs: &JobPreferences) -> bool {
    if job.status != "active" {
        return false;
    }

    let title_ok = match &prefs.titles {
        Some(titles) => {
            let job_title = job.title.to_lowercase();
            titles.iter().any(|t| job_title.contains(&t.to_lowercase()))
        }
        None => true,
    };

    let location_ok = match &prefs.locations {
        Some(locations) => locations.iter().any(|l| l == &job.location),
        None => true,
    };

    title_ok && location_ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn job(title: &str, location: &str, status: &str) -> Job {
        Job {
            id: 1,
            user_id: Some(1),
            title: title.to_string(),
            company: "Acme".to_string(),
            location: location.to_string(),
            description: "desc".to_string(),
            requirements: "reqs".to_string(),
            salary: None,
            job_type: "full-time".to_string(),
            source: Some("direct".to_string()),
            source_url: None,
            status: status.to_string(),
            applications_count: 0,
            created_at: Utc::now(),
        }
    }

    fn prefs(titles: Option<&[&str]>, locations: Option<&[&str]>) -> JobPreferences {
        JobPreferences {
            titles: titles.map(|t| t.iter().map(|s| s.to_string()).collect()),
            locations: locations.map(|l| l.iter().map(|s| s.to_string()).collect()),
        }
    }

    #[test]
    fn test_title_match_is_case_insensitive_substring() {
        let jobs = vec![
            job("Senior Software Engineer", "Remote", "active"),
            job("Product Manager", "Remote", "active"),
        ];
        let matched = matching_jobs(jobs, &prefs(Some(&["software engineer"]), None));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "Senior Software Engineer");
    }

    #[test]
    fn test_filled_job_never_matches() {
        let jobs = vec![job("Software Engineer", "Remote", "filled")];
        let matched = matching_jobs(jobs, &prefs(Some(&["Software Engineer"]), Some(&["Remote"])));
        assert!(matched.is_empty());
    }

    #[test]
    fn test_expired_job_never_matches() {
        let jobs = vec![job("Software Engineer", "Remote", "expired")];
        let matched = matching_jobs(jobs, &prefs(None, None));
        assert!(matched.is_empty());
    }

    #[test]
    fn test_location_must_be_exact_member() {
        let jobs = vec![
            job("Engineer", "New York", "active"),
            job("Engineer", "New York City", "active"),
        ];
        let matched = matching_jobs(jobs, &prefs(None, Some(&["New York"])));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].location, "New York");
    }

    #[test]
    fn test_absent_filters_match_all_active() {
        let jobs = vec![
            job("Engineer", "Remote", "active"),
            job("Designer", "Berlin", "active"),
            job("Manager", "Berlin", "filled"),
        ];
        let matched = matching_jobs(jobs, &prefs(None, None));
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn test_empty_title_list_matches_nothing() {
        let jobs = vec![job("Engineer", "Remote", "active")];
        let matched = matching_jobs(jobs, &prefs(Some(&[]), None));
        assert!(matched.is_empty());
    }

    #[test]
    fn test_both_filters_must_pass() {
        let jobs = vec![
            job("Engineer", "Remote", "active"),
            job("Engineer", "Berlin", "active"),
            job("Designer", "Remote", "active"),
        ];
        let matched = matching_jobs(jobs, &prefs(Some(&["Engineer"]), Some(&["Remote"])));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].location, "Remote");
    }
}
