mod cancel;
mod checkout;
mod me;
mod payments;
mod plans;
mod webhook;

use crate::{middlewares::RoleLayer, state::StateTrait};
use axum::{
    routing::{get, post},
    Router,
};
use entity::users::UserType;

pub use webhook::billing_webhook;

/// Routes for recruiter subscriptions
///
/// GET  /subscriptions/plans
/// GET  /subscriptions/me
/// POST /subscriptions/checkout  (coaches, NJCAA coaches)
/// POST /subscriptions/cancel
/// GET  /subscriptions/payments
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/plans", get(plans::list_plans::<S>))
        .route("/me", get(me::my_subscription::<S>))
        .route(
            "/checkout",
            post(checkout::checkout::<S>)
                .layer(RoleLayer::new(&[UserType::Coach, UserType::NjcaaCoach])),
        )
        .route("/cancel", post(cancel::cancel::<S>))
        .route("/payments", get(payments::list_payments::<S>))
}
