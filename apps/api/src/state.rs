use std::sync::Arc;

use crate::auth::SessionStore;
use crate::billing::StripeClient;
use crate::email::Mailer;
use crate::llm_client::LlmClient;
use crate::store::Store;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The store and mailer sit behind trait objects so the workflows can be
/// exercised against in-memory fakes.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub sessions: SessionStore,
    pub mailer: Arc<dyn Mailer>,
    pub billing: StripeClient,
    pub llm: LlmClient,
}
