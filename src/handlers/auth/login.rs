use super::UserView;
use crate::{
    error::{self, Result},
    extractors::Json,
    utils::verify_password,
    StateTrait,
};
use axum::extract::State;
use chrono::Utc;
use entity::users;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, Set};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct Request {
    email: String,
    password: String,
}

#[derive(Serialize)]
pub struct Response {
    token: String,
    user: UserView,
}

pub async fn login<S: StateTrait>(
    State(state): State<S>,
    Json(request): Json<Request>,
) -> Result<Json<Response>> {
    let Some(user) = users::Entity::find_by_email(&request.email)
        .one(state.db())
        .await?
    else {
        warn!(email = request.email, "login with unknown email");
        return Err(error::INVALID_CREDENTIALS);
    };

    if !verify_password(request.password, user.password_hash.clone()).await? {
        warn!(user_id = user.id.to_string(), "login with wrong password");
        return Err(error::INVALID_CREDENTIALS);
    }

    let mut active_model = user.into_active_model();
    active_model.last_login_at = Set(Some(Utc::now()));

    let user = active_model.update(state.db()).await?;
    let token = state.jwt().issue(user.id, user.user_type)?;

    Ok(Json(Response {
        token,
        user: user.into(),
    }))
}
