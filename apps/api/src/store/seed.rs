use anyhow::Result;
use tracing::info;

use crate::auth::password::hash_password;
use crate::models::{JobPreferences, NewUser};
use crate::store::Store;

/// Seeds the three development accounts. Runs once at startup against an
/// empty store; passwords are hashed like any registered account's.
pub async fn seed_dev_users(store: &dyn Store) -> Result<()> {
    let seeker = NewUser {
        username: "testuser".to_string(),
        password: hash_password("password123")?,
        email: "user@example.com".to_string(),
        role: "seeker".to_string(),
        company_name: None,
        company_logo: None,
        company_description: None,
        location: None,
        job_preferences: Some(JobPreferences {
            titles: Some(vec![
                "Software Engineer".to_string(),
                "Full Stack Developer".to_string(),
            ]),
            locations: Some(vec!["Remote".to_string(), "New York".to_string()]),
        }),
    };

    let agency = NewUser {
        username: "agency1".to_string(),
        password: hash_password("agency123")?,
        email: "agency@example.com".to_string(),
        role: "agency".to_string(),
        company_name: Some("Tech Recruiters Inc".to_string()),
        company_logo: Some("https://example.com/logo.png".to_string()),
        company_description: Some("Leading tech recruitment agency".to_string()),
        location: None,
        job_preferences: None,
    };

    let admin = NewUser {
        username: "admin".to_string(),
        password: hash_password("admin123")?,
        email: "admin@example.com".to_string(),
        role: "admin".to_string(),
        company_name: None,
        company_logo: None,
        company_description: None,
        location: None,
        job_preferences: None,
    };

    for user in [seeker, agency, admin] {
        let username = user.username.clone();
        store.create_user(user).await;
        info!("Seeded dev account: {username}");
    }

    Ok(())
}
