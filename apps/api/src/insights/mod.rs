//! Market-insight aggregates: single-pass reductions over the job list.
//! These are report queries; each endpoint recomputes from the live data.

pub mod handlers;

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::models::Job;

/// Skills the trend report counts. Anything else in the requirements
/// text is ignored.
const SKILL_PATTERN: &str = r"\b(?:javascript|python|react|node|sql|aws|docker)\b";

const TOP_N: usize = 10;

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalaryTrend {
    pub role: String,
    pub count: u32,
    pub total_salary: i64,
    pub avg_salary: i64,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct LocationTrend {
    pub location: String,
    pub count: u32,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct SkillTrend {
    pub skill: String,
    pub count: u32,
}

/// Average salary per role, where the role is the first word of the job
/// title. Jobs with no salary, or whose salary text has no digits, are
/// skipped. Roles appear in first-seen order.
pub fn salary_trends(jobs: &[Job]) -> Vec<SalaryTrend> {
    let mut trends: Vec<SalaryTrend> = Vec::new();

    for job in jobs {
        let Some(salary_text) = &job.salary else {
            continue;
        };
        let Some(salary) = parse_salary(salary_text) else {
            continue;
        };
        let role = job.title.split_whitespace().next().unwrap_or_default();

        match trends.iter_mut().find(|t| t.role == role) {
            Some(trend) => {
                trend.count += 1;
                trend.total_salary += salary;
                trend.avg_salary =
                    (trend.total_salary as f64 / trend.count as f64).round() as i64;
            }
            None => trends.push(SalaryTrend {
                role: role.to_string(),
                count: 1,
                total_salary: salary,
                avg_salary: salary,
            }),
        }
    }

    trends
}

/// Job count per location, descending, capped at ten rows.
pub fn location_trends(jobs: &[Job]) -> Vec<LocationTrend> {
    let mut trends: Vec<LocationTrend> = Vec::new();

    for job in jobs {
        match trends.iter_mut().find(|t| t.location == job.location) {
            Some(trend) => trend.count += 1,
            None => trends.push(LocationTrend {
                location: job.location.clone(),
                count: 1,
            }),
        }
    }

    trends.sort_by(|a, b| b.count.cmp(&a.count));
    trends.truncate(TOP_N);
    trends
}

/// Occurrence count per tracked skill across all requirements text,
/// descending, capped at ten rows. Every occurrence counts, not just one
/// per job.
pub fn skill_trends(jobs: &[Job]) -> Vec<SkillTrend> {
    let mut trends: Vec<SkillTrend> = Vec::new();

    for job in jobs {
        let requirements = job.requirements.to_lowercase();
        for m in skill_regex().find_iter(&requirements) {
            let skill = m.as_str();
            match trends.iter_mut().find(|t| t.skill == skill) {
                Some(trend) => trend.count += 1,
                None => trends.push(SkillTrend {
                    skill: skill.to_string(),
                    count: 1,
                }),
            }
        }
    }

    trends.sort_by(|a, b| b.count.cmp(&a.count));
    trends.truncate(TOP_N);
    trends
}

/// The ten newest jobs across direct postings and ingested ones.
pub fn recent_jobs(mut jobs: Vec<Job>) -> Vec<Job> {
    jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    jobs.truncate(TOP_N);
    jobs
}

/// Strips everything but digits and parses what remains. "$120,000" and
/// "120k USD" both parse; "Competitive" does not.
fn parse_salary(text: &str) -> Option<i64> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

fn skill_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SKILL_PATTERN).expect("static skill pattern compiles"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn job(title: &str, location: &str, salary: Option<&str>, requirements: &str) -> Job {
        Job {
            id: 1,
            user_id: Some(1),
            title: title.to_string(),
            company: "Acme".to_string(),
            location: location.to_string(),
            description: "desc".to_string(),
            requirements: requirements.to_string(),
            salary: salary.map(|s| s.to_string()),
            job_type: "full-time".to_string(),
            source: Some("direct".to_string()),
            source_url: None,
            status: "active".to_string(),
            applications_count: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_salary_trends_group_by_first_title_word() {
        let jobs = vec![
            job("Software Engineer", "Remote", Some("$100,000"), ""),
            job("Software Architect", "Remote", Some("$140,000"), ""),
            job("Product Manager", "Remote", Some("$90,000"), ""),
        ];
        let trends = salary_trends(&jobs);
        assert_eq!(trends.len(), 2);
        assert_eq!(trends[0].role, "Software");
        assert_eq!(trends[0].count, 2);
        assert_eq!(trends[0].total_salary, 240_000);
        assert_eq!(trends[0].avg_salary, 120_000);
        assert_eq!(trends[1].role, "Product");
        assert_eq!(trends[1].avg_salary, 90_000);
    }

    #[test]
    fn test_salary_trends_skip_unparseable_salaries() {
        let jobs = vec![
            job("Engineer", "Remote", None, ""),
            job("Engineer", "Remote", Some("Competitive"), ""),
            job("Engineer", "Remote", Some("120k"), ""),
        ];
        let trends = salary_trends(&jobs);
        assert_eq!(trends.len(), 1);
        assert_eq!(trends[0].count, 1);
        assert_eq!(trends[0].total_salary, 120);
    }

    #[test]
    fn test_location_trends_sorted_and_capped() {
        let mut jobs = Vec::new();
        for i in 0..12 {
            // 12 distinct locations, then extra weight on the last one
            jobs.push(job("Engineer", &format!("City {i}"), None, ""));
        }
        jobs.push(job("Engineer", "City 11", None, ""));
        jobs.push(job("Engineer", "City 11", None, ""));

        let trends = location_trends(&jobs);
        assert_eq!(trends.len(), 10);
        assert_eq!(trends[0].location, "City 11");
        assert_eq!(trends[0].count, 3);
    }

    #[test]
    fn test_skill_trends_count_every_occurrence() {
        let jobs = vec![
            job("Engineer", "Remote", None, "Python and SQL. More Python."),
            job("Engineer", "Remote", None, "React, Node, SQL"),
        ];
        let trends = skill_trends(&jobs);
        let python = trends.iter().find(|t| t.skill == "python").unwrap();
        assert_eq!(python.count, 2);
        let sql = trends.iter().find(|t| t.skill == "sql").unwrap();
        assert_eq!(sql.count, 2);
        // Highest counts first
        assert!(trends[0].count >= trends[trends.len() - 1].count);
    }

    #[test]
    fn test_skill_trends_require_word_boundaries() {
        let jobs = vec![job("Engineer", "Remote", None, "mysql nodes awsome")];
        // "mysql" contains "sql" mid-word; "nodes"/"awsome" extend the
        // keywords past their boundary
        let trends = skill_trends(&jobs);
        assert!(trends.iter().all(|t| t.skill != "sql"));
        assert!(trends.iter().all(|t| t.skill != "node"));
        assert!(trends.iter().all(|t| t.skill != "aws"));
    }

    #[test]
    fn test_recent_jobs_newest_first_capped_at_ten() {
        let now = Utc::now();
        let mut jobs = Vec::new();
        for i in 0..12 {
            let mut j = job(&format!("Job {i}"), "Remote", None, "");
            j.created_at = now - Duration::hours(i);
            jobs.push(j);
        }
        let recent = recent_jobs(jobs);
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].title, "Job 0");
        assert_eq!(recent[9].title, "Job 9");
    }
}
