use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const SEARCH_URL: &str = "https://api.twitter.com/2/tweets/search/recent";

#[derive(Debug, Error)]
pub enum TwitterError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// One tweet from the recent-search response.
#[derive(Debug, Clone, Deserialize)]
pub struct Tweet {
    pub id: String,
    pub text: String,
    pub author_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    // Absent entirely when the query matched nothing.
    #[serde(default)]
    data: Vec<Tweet>,
}

/// Minimal client for the Twitter v2 recent-search endpoint.
#[derive(Clone)]
pub struct TwitterClient {
    client: Client,
    bearer_token: String,
}

impl TwitterClient {
    pub fn new(bearer_token: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            bearer_token,
        }
    }

    /// Searches recent tweets matching the query. Returns an empty list
    /// when nothing matched.
    pub async fn search_recent(&self, query: &str) -> Result<Vec<Tweet>, TwitterError> {
        let response = self
            .client
            .get(SEARCH_URL)
            .bearer_auth(&self.bearer_token)
            .query(&[("query", query), ("tweet.fields", "author_id")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TwitterError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let search: SearchResponse = response.json().await?;
        debug!("Tweet search returned {} results", search.data.len());
        Ok(search.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_with_results() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"data":[{"id":"1","text":"we're hiring","author_id":"42"}]}"#,
        )
        .unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].author_id.as_deref(), Some("42"));
    }

    #[test]
    fn test_empty_search_response_has_no_data_key() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"meta":{"result_count":0}}"#).unwrap();
        assert!(response.data.is_empty());
    }
}
