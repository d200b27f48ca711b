use crate::{
    error::{self, Result},
    extractors::ValidatedJson,
    utils::hash_password,
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::Utc;
use entity::users;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, Set};
use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    token: String,
    #[validate(length(min = 8, max = 128))]
    password: String,
}

pub async fn reset_password<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<StatusCode> {
    let Some(user) = users::Entity::find_by_reset_token(&request.token)
        .one(state.db())
        .await?
    else {
        warn!("tried unknown password reset token");
        return Err(error::INVALID_TOKEN);
    };

    let expired = user
        .reset_token_expires_at
        .map_or(true, |expires_at| expires_at <= Utc::now());

    if expired {
        return Err(error::INVALID_TOKEN);
    }

    let password_hash = hash_password(request.password).await?;

    let mut active_model = user.into_active_model();
    active_model.password_hash = Set(password_hash);
    active_model.reset_token = Set(None);
    active_model.reset_token_expires_at = Set(None);

    active_model.update(state.db()).await?;

    Ok(StatusCode::NO_CONTENT)
}
