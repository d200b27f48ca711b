use crate::{
    error::{self, Result},
    extractors::Json,
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use entity::users;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, Set};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Request {
    token: String,
}

pub async fn verify_email<S: StateTrait>(
    State(state): State<S>,
    Json(request): Json<Request>,
) -> Result<StatusCode> {
    let Some(user) = users::Entity::find_by_verification_token(&request.token)
        .one(state.db())
        .await?
    else {
        warn!("tried unknown verification token");
        return Err(error::INVALID_TOKEN);
    };

    let mut active_model = user.into_active_model();
    active_model.is_verified = Set(true);
    active_model.verification_token = Set(None);

    active_model.update(state.db()).await?;

    Ok(StatusCode::NO_CONTENT)
}
