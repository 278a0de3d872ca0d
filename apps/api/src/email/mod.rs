//! Transactional email. The `Mailer` trait sits in `AppState` as
//! `Arc<dyn Mailer>` so workflows can be exercised with a recording fake;
//! `SendGridMailer` is the production implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

const SENDGRID_API_URL: &str = "https://api.sendgrid.com/v3/mail/send";

const NOTIFICATIONS_FROM: &str = "notifications@jobportal.com";
const WELCOME_FROM: &str = "welcome@jobportal.com";

#[derive(Debug, Error)]
pub enum EmailError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub html: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), EmailError>;
}

pub struct SendGridMailer {
    client: Client,
    api_key: String,
}

impl SendGridMailer {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl Mailer for SendGridMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), EmailError> {
        let body = json!({
            "personalizations": [{ "to": [{ "email": message.to }] }],
            "from": { "email": message.from },
            "subject": message.subject,
            "content": [{ "type": "text/html", "value": message.html }],
        });

        let response = self
            .client
            .post(SENDGRID_API_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(EmailError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!("Email sent to {} ({})", message.to, message.subject);
        Ok(())
    }
}

/// Employer notification sent once per successful application.
pub fn application_notification(
    employer_email: &str,
    job_title: &str,
    candidate_name: &str,
) -> EmailMessage {
    EmailMessage {
        to: employer_email.to_string(),
        from: NOTIFICATIONS_FROM.to_string(),
        subject: format!("New Application: {job_title}"),
        html: format!(
            "<h2>New Job Application Received</h2>\
             <p>Hello,</p>\
             <p>{candidate_name} has applied for the position of {job_title}.</p>\
             <p>Login to your dashboard to review the application.</p>"
        ),
    }
}

/// Welcome email sent on registration.
pub fn welcome_email(email: &str, username: &str) -> EmailMessage {
    EmailMessage {
        to: email.to_string(),
        from: WELCOME_FROM.to_string(),
        subject: "Welcome to JobPortal".to_string(),
        html: format!(
            "<h2>Welcome to JobPortal!</h2>\
             <p>Hello {username},</p>\
             <p>Thank you for joining JobPortal. We're excited to help you in your career journey.</p>\
             <p>Get started by:</p>\
             <ul>\
               <li>Creating your resume</li>\
               <li>Browsing available jobs</li>\
               <li>Setting up job alerts</li>\
             </ul>"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_notification_addresses_employer() {
        let message = application_notification("boss@acme.com", "Rust Engineer", "alice");
        assert_eq!(message.to, "boss@acme.com");
        assert_eq!(message.from, NOTIFICATIONS_FROM);
        assert_eq!(message.subject, "New Application: Rust Engineer");
        assert!(message.html.contains("alice"));
        assert!(message.html.contains("Rust Engineer"));
    }

    #[test]
    fn test_welcome_email_greets_user() {
        let message = welcome_email("new@example.com", "newbie");
        assert_eq!(message.to, "new@example.com");
        assert_eq!(message.from, WELCOME_FROM);
        assert!(message.html.contains("Hello newbie"));
    }
}
