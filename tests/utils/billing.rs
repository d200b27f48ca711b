use axum::async_trait;
use portall_backend::billing::{BillingTrait, CheckoutRequest, CheckoutSession};
use std::sync::Mutex;
use uuid::Uuid;

/// Stands in for the payment provider and remembers what it was asked to do.
#[derive(Debug, Default)]
pub struct FakeBilling {
    pub customers: Mutex<Vec<String>>,
    pub sessions: Mutex<Vec<String>>,
    pub canceled: Mutex<Vec<String>>,
}

#[async_trait]
impl BillingTrait for FakeBilling {
    async fn create_customer(&self, email: &str, _user_id: Uuid) -> anyhow::Result<String> {
        let id = format!("cus_{}", Uuid::new_v4().simple());
        self.customers.lock().unwrap().push(email.to_owned());
        Ok(id)
    }

    async fn create_checkout_session(
        &self,
        request: CheckoutRequest<'_>,
    ) -> anyhow::Result<CheckoutSession> {
        let id = format!("cs_{}", Uuid::new_v4().simple());
        self.sessions
            .lock()
            .unwrap()
            .push(request.price_id.to_owned());

        Ok(CheckoutSession {
            url: format!("https://checkout.test/{id}"),
            id,
        })
    }

    async fn cancel_at_period_end(&self, subscription_id: &str) -> anyhow::Result<()> {
        self.canceled
            .lock()
            .unwrap()
            .push(subscription_id.to_owned());
        Ok(())
    }
}
