use super::UserView;
use crate::{
    error::{self, Result},
    extractors::{AuthUser, Json},
    handlers::profile::{load_profile, Profile},
    StateTrait,
};
use axum::extract::State;
use entity::users;
use sea_orm::EntityTrait;
use serde::Serialize;

#[derive(Serialize)]
pub struct Response {
    user: UserView,
    profile: Option<Profile>,
}

pub async fn me<S: StateTrait>(State(state): State<S>, user: AuthUser) -> Result<Json<Response>> {
    let model = users::Entity::find_by_id(user.id)
        .one(state.db())
        .await?
        .ok_or(error::USER_NOT_FOUND)?;

    let profile = load_profile(state.db(), &user).await?;

    Ok(Json(Response {
        user: model.into(),
        profile,
    }))
}
