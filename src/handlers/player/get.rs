use super::{has_full_access, PlayerView};
use crate::{
    error::{self, Result},
    extractors::{ensure_subscription, AuthUser, Json, Path},
    StateTrait,
};
use axum::extract::State;
use entity::{njcaa_colleges, player_profiles, users::UserType};
use sea_orm::EntityTrait;
use uuid::Uuid;

pub async fn get_player<S: StateTrait>(
    State(state): State<S>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<PlayerView>> {
    let Some((profile, college)) = player_profiles::Entity::find_by_id(id)
        .find_also_related(njcaa_colleges::Entity)
        .one(state.db())
        .await?
    else {
        return Err(error::PLAYER_NOT_FOUND);
    };

    if !has_full_access(state.db(), &user, &profile).await? {
        // hidden profiles look the same as missing ones
        if !profile.is_visible {
            return Err(error::PLAYER_NOT_FOUND);
        }

        if user.is(UserType::Coach) {
            ensure_subscription(state.db(), &user).await?;
        }
    }

    Ok(Json(PlayerView { profile, college }))
}
