use super::denied;
use crate::{
    error::{self, Result},
    extractors::{ensure_subscription, AuthUser, Json, Path},
    handlers::player::has_full_access,
    StateTrait,
};
use axum::extract::State;
use entity::{player_evaluations, player_profiles, users::UserType};
use sea_orm::EntityTrait;
use uuid::Uuid;

/// Recruiters with a subscription may read the current evaluation of players
/// who made themselves visible.
pub async fn current_evaluation<S: StateTrait>(
    State(state): State<S>,
    user: AuthUser,
    Path(player_id): Path<Uuid>,
) -> Result<Json<player_evaluations::Model>> {
    let player = player_profiles::Entity::find_by_id(player_id)
        .one(state.db())
        .await?
        .ok_or(error::PLAYER_NOT_FOUND)?;

    if !has_full_access(state.db(), &user, &player).await? {
        if !player.is_visible {
            return Err(error::PLAYER_NOT_FOUND);
        }

        if !user.is(UserType::Coach) {
            return Err(denied(&user));
        }

        ensure_subscription(state.db(), &user).await?;
    }

    player_evaluations::Entity::find_current(player.id)
        .one(state.db())
        .await?
        .map(Json)
        .ok_or(error::EVALUATION_NOT_FOUND)
}
