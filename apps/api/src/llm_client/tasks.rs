//! Typed wrappers around the LLM client, one per product task.

use serde::Deserialize;

use crate::llm_client::prompts::{
    ENHANCE_RESUME_SYSTEM, GENERATE_JOB_DESCRIPTION_SYSTEM, PARSE_JOB_POST_SYSTEM,
    REVIEW_RESUME_SYSTEM, SUGGEST_SKILLS_SYSTEM,
};
use crate::llm_client::{LlmClient, LlmError};

/// A job posting extracted from a social post, with the model's own
/// confidence that the post is a real opening.
#[derive(Debug, Clone, Deserialize)]
pub struct ParsedJobPost {
    pub title: String,
    pub company: String,
    pub location: String,
    pub requirements: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub confidence: f64,
}

/// Score and suggestions produced by the resume review pass.
#[derive(Debug, Clone, Deserialize)]
pub struct ResumeReview {
    pub score: i32,
    pub suggestions: Vec<String>,
}

/// Rewrites resume content, keeping it professional and achievement-led.
pub async fn enhance_resume(llm: &LlmClient, content: &str) -> Result<String, LlmError> {
    llm.call(ENHANCE_RESUME_SYSTEM, content).await
}

/// Extracts a skill list from a job description.
pub async fn suggest_skills(llm: &LlmClient, job_description: &str) -> Result<Vec<String>, LlmError> {
    let response = llm.call(SUGGEST_SKILLS_SYSTEM, job_description).await?;
    Ok(split_skills(&response))
}

/// Generates a job description from a title and requirements.
pub async fn generate_job_description(
    llm: &LlmClient,
    title: &str,
    requirements: &str,
) -> Result<String, LlmError> {
    let prompt = format!("Title: {title}\nRequirements: {requirements}");
    llm.call(GENERATE_JOB_DESCRIPTION_SYSTEM, &prompt).await
}

/// Scores a resume and collects improvement suggestions.
pub async fn review_resume(llm: &LlmClient, content: &str) -> Result<ResumeReview, LlmError> {
    llm.call_json(REVIEW_RESUME_SYSTEM, content).await
}

/// Parses a job posting out of a tweet.
pub async fn parse_job_post(llm: &LlmClient, post_text: &str) -> Result<ParsedJobPost, LlmError> {
    llm.call_json(PARSE_JOB_POST_SYSTEM, post_text).await
}

fn split_skills(response: &str) -> Vec<String> {
    response
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_skills_trims_whitespace() {
        let skills = split_skills("Rust, Python ,  SQL");
        assert_eq!(skills, vec!["Rust", "Python", "SQL"]);
    }

    #[test]
    fn test_split_skills_drops_empty_segments() {
        let skills = split_skills("Rust,,Python,");
        assert_eq!(skills, vec!["Rust", "Python"]);
    }

    #[test]
    fn test_parsed_job_post_deserializes_type_field() {
        let parsed: ParsedJobPost = serde_json::from_str(
            r#"{"title":"Engineer","company":"Acme","location":"Remote",
                "requirements":"Rust","type":"full-time","confidence":0.9}"#,
        )
        .unwrap();
        assert_eq!(parsed.job_type, "full-time");
        assert!(parsed.confidence > 0.7);
    }
}
