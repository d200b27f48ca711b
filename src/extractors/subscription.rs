use super::AuthUser;
use crate::{error, Error, StateTrait};
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use chrono::Utc;
use entity::{user_subscriptions, users::UserType};
use sea_orm::{ConnectionTrait, EntityTrait};

/// Admits admins and callers holding a subscription that currently grants
/// access.
#[derive(Debug, Clone, Copy)]
pub struct ActiveSubscription(pub AuthUser);

#[async_trait]
impl<S> FromRequestParts<S> for ActiveSubscription
where
    S: StateTrait,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        ensure_subscription(state.db(), &user).await?;

        Ok(Self(user))
    }
}

pub async fn ensure_subscription<C: ConnectionTrait>(db: &C, user: &AuthUser) -> error::Result {
    if user.is(UserType::Admin) {
        return Ok(());
    }

    let subscription = user_subscriptions::Entity::find_by_user(user.id)
        .one(db)
        .await?;

    match subscription {
        Some(subscription) if subscription.grants_access(Utc::now()) => Ok(()),
        _ => Err(error::SUBSCRIPTION_REQUIRED),
    }
}
