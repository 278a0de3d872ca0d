//! Subscription billing — a thin pass-through to the Stripe API.
//!
//! `StripeClient` wraps the three provider calls the product needs;
//! `create_subscription`/`cancel_subscription` orchestrate them against
//! the store.

pub mod handlers;
mod stripe;

pub use stripe::{CreatedSubscription, StripeClient, StripeError};

use serde::Serialize;

use crate::errors::AppError;
use crate::models::User;
use crate::store::Store;

/// Maps a subscription tier to its configured Stripe price id.
pub fn price_for_tier(tier: &str) -> Option<&'static str> {
    match tier {
        "basic" => Some("price_basic"),
        "pro" => Some("price_pro"),
        "premium" => Some("price_premium"),
        _ => None,
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeResponse {
    pub subscription_id: String,
    pub client_secret: Option<String>,
}

/// Creates (or reuses) the billing customer, opens the subscription and
/// records both on the user.
pub async fn create_subscription(
    store: &dyn Store,
    stripe: &StripeClient,
    user: &User,
    tier: &str,
) -> Result<SubscribeResponse, AppError> {
    let price =
        price_for_tier(tier).ok_or_else(|| AppError::Validation(format!("Unknown tier: {tier}")))?;

    let customer_id = match &user.stripe_customer_id {
        Some(id) => id.clone(),
        None => {
            let id = stripe
                .create_customer(&user.email, &user.username)
                .await
                .map_err(|e| AppError::Payment(e.to_string()))?;
            store.update_stripe_customer_id(user.id, &id).await?;
            id
        }
    };

    let subscription = stripe
        .create_subscription(&customer_id, price)
        .await
        .map_err(|e| AppError::Payment(e.to_string()))?;

    store
        .update_stripe_subscription(user.id, Some(subscription.id.clone()), tier)
        .await?;

    Ok(SubscribeResponse {
        subscription_id: subscription.id,
        client_secret: subscription.client_secret,
    })
}

/// Cancels the user's subscription and drops them back to the free tier.
pub async fn cancel_subscription(
    store: &dyn Store,
    stripe: &StripeClient,
    user: &User,
) -> Result<(), AppError> {
    let subscription_id = user
        .stripe_subscription_id
        .as_deref()
        .ok_or_else(|| AppError::Payment("No active subscription found".to_string()))?;

    stripe
        .cancel_subscription(subscription_id)
        .await
        .map_err(|e| AppError::Payment(e.to_string()))?;

    store
        .update_stripe_subscription(user.id, None, "free")
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_for_known_tiers() {
        assert_eq!(price_for_tier("basic"), Some("price_basic"));
        assert_eq!(price_for_tier("pro"), Some("price_pro"));
        assert_eq!(price_for_tier("premium"), Some("price_premium"));
    }

    #[test]
    fn test_price_for_unknown_tier_is_none() {
        assert_eq!(price_for_tier("enterprise"), None);
        assert_eq!(price_for_tier(""), None);
    }
}
