use crate::{
    error::{self, Result},
    extractors::{AuthUser, Json},
    StateTrait,
};
use axum::extract::State;
use chrono::Utc;
use entity::user_subscriptions;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, Set};

/// Access lasts until the end of the paid period.
pub async fn cancel<S: StateTrait>(
    State(state): State<S>,
    user: AuthUser,
) -> Result<Json<user_subscriptions::Model>> {
    let subscription = user_subscriptions::Entity::find_by_user(user.id)
        .one(state.db())
        .await?
        .filter(|subscription| subscription.grants_access(Utc::now()))
        .ok_or(error::SUBSCRIPTION_NOT_FOUND)?;

    let Some(provider_id) = subscription.provider_subscription_id.clone() else {
        return Err(error::SUBSCRIPTION_NOT_FOUND);
    };

    if subscription.cancel_at_period_end {
        return Ok(Json(subscription));
    }

    state.billing().cancel_at_period_end(&provider_id).await?;

    let mut active_model = subscription.into_active_model();
    active_model.cancel_at_period_end = Set(true);
    let subscription = active_model.update(state.db()).await?;

    info!(user_id = user.id.to_string(), "canceled subscription at period end");

    Ok(Json(subscription))
}
