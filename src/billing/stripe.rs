use super::{BillingTrait, CheckoutRequest, CheckoutSession};
use crate::Config;
use anyhow::Context;
use axum::async_trait;
use serde::Deserialize;
use uuid::Uuid;

/// Stripe REST client. Requests are form encoded and authenticated with the
/// secret key.
pub struct Stripe {
    client: reqwest::Client,
    api_url: String,
    secret_key: String,
    frontend_url: String,
}

#[derive(Deserialize)]
struct Customer {
    id: String,
}

#[derive(Deserialize)]
struct Session {
    id: String,
    url: Option<String>,
}

impl Stripe {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.stripe_api_url.trim_end_matches('/').to_owned(),
            secret_key: config.stripe_secret_key.clone(),
            frontend_url: config.frontend_url.trim_end_matches('/').to_owned(),
        }
    }

    async fn post<T>(&self, path: &str, form: &[(&str, String)]) -> anyhow::Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let res = self
            .client
            .post(format!("{}{}", self.api_url, path))
            .bearer_auth(&self.secret_key)
            .form(form)
            .send()
            .await
            .with_context(|| format!("failed to reach stripe at {path}"))?;

        let status = res.status();

        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            anyhow::bail!("stripe returned {status} for {path}: {body}");
        }

        res.json::<T>()
            .await
            .with_context(|| format!("stripe returned an unexpected body for {path}"))
    }
}

#[async_trait]
impl BillingTrait for Stripe {
    async fn create_customer(&self, email: &str, user_id: Uuid) -> anyhow::Result<String> {
        let customer: Customer = self
            .post(
                "/v1/customers",
                &[
                    ("email", email.to_owned()),
                    ("metadata[user_id]", user_id.to_string()),
                ],
            )
            .await?;

        info!(customer = customer.id, "created billing customer");

        Ok(customer.id)
    }

    async fn create_checkout_session(
        &self,
        request: CheckoutRequest<'_>,
    ) -> anyhow::Result<CheckoutSession> {
        let session: Session = self
            .post(
                "/v1/checkout/sessions",
                &[
                    ("mode", "subscription".to_owned()),
                    ("customer", request.customer_id.to_owned()),
                    ("client_reference_id", request.user_id.to_string()),
                    ("line_items[0][price]", request.price_id.to_owned()),
                    ("line_items[0][quantity]", "1".to_owned()),
                    ("metadata[user_id]", request.user_id.to_string()),
                    ("metadata[plan_id]", request.plan_id.to_string()),
                    (
                        "success_url",
                        format!(
                            "{}/subscription/success?session_id={{CHECKOUT_SESSION_ID}}",
                            self.frontend_url
                        ),
                    ),
                    (
                        "cancel_url",
                        format!("{}/subscription/cancel", self.frontend_url),
                    ),
                ],
            )
            .await?;

        let url = session
            .url
            .context("stripe returned a checkout session without url")?;

        Ok(CheckoutSession {
            id: session.id,
            url,
        })
    }

    async fn cancel_at_period_end(&self, subscription_id: &str) -> anyhow::Result<()> {
        let _: serde_json::Value = self
            .post(
                &format!("/v1/subscriptions/{subscription_id}"),
                &[("cancel_at_period_end", "true".to_owned())],
            )
            .await?;

        Ok(())
    }
}
