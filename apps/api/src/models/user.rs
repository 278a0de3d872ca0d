use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A seeker's stored job-search preferences. Both filters are optional;
/// an absent filter matches everything, an empty list matches nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPreferences {
    pub titles: Option<Vec<String>>,
    pub locations: Option<Vec<String>>,
}

/// A platform account. `role` is one of "seeker", "agency", "admin".
/// The password field holds the Argon2id hash and is never serialized.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub email: String,
    pub role: String,
    pub stripe_customer_id: Option<String>,
    pub stripe_subscription_id: Option<String>,
    pub subscription_tier: String,
    pub company_name: Option<String>,
    pub company_logo: Option<String>,
    pub company_description: Option<String>,
    pub location: Option<String>,
    pub job_preferences: Option<JobPreferences>,
    pub created_at: DateTime<Utc>,
}

/// Insertable user fields. Billing fields and the tier are set by the
/// store on creation (tier starts at "free").
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub role: String,
    pub company_name: Option<String>,
    pub company_logo: Option<String>,
    pub company_description: Option<String>,
    pub location: Option<String>,
    pub job_preferences: Option<JobPreferences>,
}
