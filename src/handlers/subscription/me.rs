use crate::{
    error::Result,
    extractors::{AuthUser, Json},
    StateTrait,
};
use axum::extract::State;
use entity::{subscription_plans, user_subscriptions};
use sea_orm::EntityTrait;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SubscriptionView {
    #[serde(flatten)]
    subscription: user_subscriptions::Model,
    plan: Option<subscription_plans::Model>,
    is_active: bool,
}

/// `null` when the caller never started a checkout.
pub async fn my_subscription<S: StateTrait>(
    State(state): State<S>,
    user: AuthUser,
) -> Result<Json<Option<SubscriptionView>>> {
    let subscription = user_subscriptions::Entity::find_by_user(user.id)
        .find_also_related(subscription_plans::Entity)
        .one(state.db())
        .await?;

    let view = subscription.map(|(subscription, plan)| SubscriptionView {
        is_active: subscription.grants_access(chrono::Utc::now()),
        subscription,
        plan,
    });

    Ok(Json(view))
}
