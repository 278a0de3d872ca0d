//! Social-post ingestion: a periodic crawl that turns hiring tweets into
//! job listings via the AI parse, plus ambient housekeeping (session
//! pruning) on the same tick.

pub mod twitter;

pub use twitter::{Tweet, TwitterClient, TwitterError};

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::auth::SessionStore;
use crate::llm_client::tasks::{self, ParsedJobPost};
use crate::llm_client::LlmClient;
use crate::models::{Job, NewJob, NewTwitterJob, TwitterJob, TwitterJobPatch};
use crate::store::{Store, StoreError};

/// Recent-search query for hiring language.
const HIRING_QUERY: &str = r#"(hiring OR "job opening" OR "we're looking") -is:retweet lang:en"#;

/// Parse confidence a post must exceed before a listing is created.
const CONFIDENCE_THRESHOLD: f64 = 0.7;

#[derive(Debug, Default)]
pub struct CrawlStats {
    pub tweets_seen: usize,
    pub tweets_skipped: usize,
    pub jobs_created: usize,
}

/// Runs the crawl on a fixed interval, forever. A failed cycle is logged
/// and the next tick proceeds; there is no backoff.
pub async fn run_ingest_loop(
    store: Arc<dyn Store>,
    sessions: SessionStore,
    twitter: TwitterClient,
    llm: LlmClient,
    interval_secs: u64,
) {
    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));

    loop {
        interval.tick().await;

        let pruned = sessions.prune_expired().await;
        if pruned > 0 {
            debug!("Pruned {pruned} expired sessions");
        }

        match crawl_cycle(store.as_ref(), &twitter, &llm).await {
            Ok(stats) => info!(
                "Ingest cycle: {} tweets seen, {} already known, {} jobs created",
                stats.tweets_seen, stats.tweets_skipped, stats.jobs_created
            ),
            Err(e) => warn!("Error crawling Twitter jobs: {e}"),
        }
    }
}

/// One crawl pass: search, dedup by tweet id, store the raw post, parse,
/// and publish listings for confident parses.
pub async fn crawl_cycle(
    store: &dyn Store,
    twitter: &TwitterClient,
    llm: &LlmClient,
) -> Result<CrawlStats> {
    let tweets = twitter.search_recent(HIRING_QUERY).await?;
    let mut stats = CrawlStats {
        tweets_seen: tweets.len(),
        ..Default::default()
    };

    for tweet in tweets {
        // A tweet id already in the store is the only dedup.
        if store.get_twitter_job_by_tweet_id(&tweet.id).await.is_some() {
            stats.tweets_skipped += 1;
            continue;
        }

        let record = store
            .create_twitter_job(NewTwitterJob {
                tweet_id: tweet.id.clone(),
                content: tweet.text.clone(),
                author: tweet.author_id.unwrap_or_default(),
            })
            .await;

        let parsed = tasks::parse_job_post(llm, &tweet.text).await?;
        if publish_parsed_job(store, &record, &parsed).await?.is_some() {
            stats.jobs_created += 1;
        }
    }

    Ok(stats)
}

/// Publishes a listing for a parsed post when the model is confident it
/// is a real opening, and links the stored post to it. Low-confidence
/// parses leave the raw post unprocessed.
async fn publish_parsed_job(
    store: &dyn Store,
    record: &TwitterJob,
    parsed: &ParsedJobPost,
) -> Result<Option<Job>, StoreError> {
    if parsed.confidence <= CONFIDENCE_THRESHOLD {
        return Ok(None);
    }

    let job = store
        .create_job(NewJob {
            user_id: None,
            title: parsed.title.clone(),
            company: parsed.company.clone(),
            location: parsed.location.clone(),
            description: record.content.clone(),
            requirements: parsed.requirements.clone(),
            salary: None,
            job_type: parsed.job_type.clone(),
            source: Some("twitter".to_string()),
            source_url: Some(format!(
                "https://twitter.com/i/web/status/{}",
                record.tweet_id
            )),
        })
        .await;

    store
        .update_twitter_job(
            record.id,
            TwitterJobPatch {
                parsed_title: Some(parsed.title.clone()),
                parsed_company: Some(parsed.company.clone()),
                parsed_location: Some(parsed.location.clone()),
                processed: Some(true),
                job_id: Some(job.id),
            },
        )
        .await?;

    Ok(Some(job))
}
