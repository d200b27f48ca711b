use super::denied;
use crate::{
    error::{self, Result},
    extractors::{AuthUser, Json, Path},
    handlers::player::has_full_access,
    StateTrait,
};
use axum::extract::State;
use entity::{player_evaluations, player_profiles};
use sea_orm::{EntityTrait, QueryOrder};
use uuid::Uuid;

/// Full history, newest version first.
pub async fn list_evaluations<S: StateTrait>(
    State(state): State<S>,
    user: AuthUser,
    Path(player_id): Path<Uuid>,
) -> Result<Json<Vec<player_evaluations::Model>>> {
    let player = player_profiles::Entity::find_by_id(player_id)
        .one(state.db())
        .await?
        .ok_or(error::PLAYER_NOT_FOUND)?;

    if !has_full_access(state.db(), &user, &player).await? {
        return Err(denied(&user));
    }

    let evaluations = player_evaluations::Entity::find_by_player(player.id)
        .order_by_desc(player_evaluations::Column::Version)
        .all(state.db())
        .await?;

    Ok(Json(evaluations))
}
