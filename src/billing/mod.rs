//! Billing provider integration.
//!
//! Handlers talk to the provider through [`BillingTrait`] so tests can swap
//! in a fake. [`Stripe`] is the production implementation.

mod stripe;
pub mod webhook;

pub use stripe::Stripe;

use axum::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CheckoutRequest<'a> {
    pub customer_id: &'a str,
    pub price_id: &'a str,
    pub user_id: Uuid,
    pub plan_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct CheckoutSession {
    pub id: String,
    pub url: String,
}

#[async_trait]
pub trait BillingTrait: Send + Sync {
    /// Registers a customer and returns its provider id.
    async fn create_customer(&self, email: &str, user_id: Uuid) -> anyhow::Result<String>;

    /// Opens a hosted checkout page for a recurring price.
    async fn create_checkout_session(
        &self,
        request: CheckoutRequest<'_>,
    ) -> anyhow::Result<CheckoutSession>;

    async fn cancel_at_period_end(&self, subscription_id: &str) -> anyhow::Result<()>;
}
