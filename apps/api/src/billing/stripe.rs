use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const STRIPE_API_URL: &str = "https://api.stripe.com/v1";

#[derive(Debug, Error)]
pub enum StripeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Deserialize)]
struct Customer {
    id: String,
}

#[derive(Debug, Deserialize)]
struct Subscription {
    id: String,
    latest_invoice: Option<Invoice>,
}

#[derive(Debug, Deserialize)]
struct Invoice {
    payment_intent: Option<PaymentIntent>,
}

#[derive(Debug, Deserialize)]
struct PaymentIntent {
    client_secret: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// A freshly created subscription with the client secret the frontend
/// needs to confirm the first payment.
#[derive(Debug, Clone)]
pub struct CreatedSubscription {
    pub id: String,
    pub client_secret: Option<String>,
}

#[derive(Clone)]
pub struct StripeClient {
    client: Client,
    secret_key: String,
}

impl StripeClient {
    pub fn new(secret_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            secret_key,
        }
    }

    pub async fn create_customer(&self, email: &str, name: &str) -> Result<String, StripeError> {
        let response = self
            .client
            .post(format!("{STRIPE_API_URL}/customers"))
            .bearer_auth(&self.secret_key)
            .form(&[("email", email), ("name", name)])
            .send()
            .await?;

        let customer: Customer = decode(response).await?;
        debug!("Created billing customer {}", customer.id);
        Ok(customer.id)
    }

    /// Opens an incomplete subscription so the first invoice's payment
    /// intent can be confirmed client-side.
    pub async fn create_subscription(
        &self,
        customer_id: &str,
        price_id: &str,
    ) -> Result<CreatedSubscription, StripeError> {
        let response = self
            .client
            .post(format!("{STRIPE_API_URL}/subscriptions"))
            .bearer_auth(&self.secret_key)
            .form(&[
                ("customer", customer_id),
                ("items[0][price]", price_id),
                ("payment_behavior", "default_incomplete"),
                ("expand[]", "latest_invoice.payment_intent"),
            ])
            .send()
            .await?;

        let subscription: Subscription = decode(response).await?;
        debug!("Created subscription {}", subscription.id);

        let client_secret = subscription
            .latest_invoice
            .and_then(|i| i.payment_intent)
            .and_then(|p| p.client_secret);

        Ok(CreatedSubscription {
            id: subscription.id,
            client_secret,
        })
    }

    pub async fn cancel_subscription(&self, subscription_id: &str) -> Result<(), StripeError> {
        let response = self
            .client
            .delete(format!("{STRIPE_API_URL}/subscriptions/{subscription_id}"))
            .bearer_auth(&self.secret_key)
            .send()
            .await?;

        let _: Subscription = decode(response).await?;
        debug!("Cancelled subscription {subscription_id}");
        Ok(())
    }
}

async fn decode<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, StripeError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorEnvelope>(&body)
            .map(|e| e.error.message)
            .unwrap_or(body);
        return Err(StripeError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response.json().await?)
}
