use crate::{
    error::Result,
    extractors::{AuthUser, Json},
    StateTrait,
};
use axum::extract::State;
use entity::{payment_history, user_subscriptions};
use sea_orm::{EntityTrait, QueryOrder};

/// Newest first.
pub async fn list_payments<S: StateTrait>(
    State(state): State<S>,
    user: AuthUser,
) -> Result<Json<Vec<payment_history::Model>>> {
    let Some(subscription) = user_subscriptions::Entity::find_by_user(user.id)
        .one(state.db())
        .await?
    else {
        return Ok(Json(Vec::new()));
    };

    let payments = payment_history::Entity::find_by_subscription(subscription.id)
        .order_by_desc(payment_history::Column::CreatedAt)
        .all(state.db())
        .await?;

    Ok(Json(payments))
}
