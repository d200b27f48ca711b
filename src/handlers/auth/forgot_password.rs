use crate::{error::Result, extractors::ValidatedJson, utils::generate_token, StateTrait};
use axum::{extract::State, http::StatusCode};
use chrono::{Duration, Utc};
use entity::users;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, Set};
use serde::Deserialize;
use validator::Validate;

/// How long a reset token stays usable.
const RESET_TOKEN_TTL_HOURS: i64 = 1;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(email)]
    email: String,
}

/// Always answers 204 so the endpoint cannot be used to probe for accounts.
pub async fn forgot_password<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<StatusCode> {
    let Some(user) = users::Entity::find_by_email(&request.email)
        .one(state.db())
        .await?
    else {
        return Ok(StatusCode::NO_CONTENT);
    };

    let token = generate_token(&mut state.rng());

    let mut active_model = user.into_active_model();
    active_model.reset_token = Set(Some(token.clone()));
    active_model.reset_token_expires_at =
        Set(Some(Utc::now() + Duration::hours(RESET_TOKEN_TTL_HOURS)));

    let user = active_model.update(state.db()).await?;

    info!(user_id = user.id.to_string(), "issued password reset token");
    debug!(token, "password reset token");

    Ok(StatusCode::NO_CONTENT)
}
