use crate::{
    error::{self, Result},
    extractors::{AuthUser, Json},
    StateTrait,
};
use axum::extract::State;
use entity::player_profiles;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, Set};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct Visibility {
    is_visible: bool,
}

/// Players opt in to being discovered by recruiters.
pub async fn set_visibility<S: StateTrait>(
    State(state): State<S>,
    user: AuthUser,
    Json(request): Json<Visibility>,
) -> Result<Json<Visibility>> {
    let profile = player_profiles::Entity::find_by_user(user.id)
        .one(state.db())
        .await?
        .ok_or(error::PROFILE_NOT_FOUND)?;

    if profile.is_visible == request.is_visible {
        return Ok(Json(request));
    }

    let mut active_model = profile.into_active_model();
    active_model.is_visible = Set(request.is_visible);

    let profile = active_model.update(state.db()).await?;

    info!(
        user_id = user.id.to_string(),
        is_visible = profile.is_visible,
        "changed profile visibility"
    );

    Ok(Json(Visibility {
        is_visible: profile.is_visible,
    }))
}
