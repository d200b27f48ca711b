use super::PlayerView;
use crate::{
    error::{self, Result},
    extractors::{AuthUser, Json},
    StateTrait,
};
use axum::extract::State;
use entity::{njcaa_coach_profiles, njcaa_colleges, player_profiles};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

/// Every player of the coach's college, visible or not.
pub async fn get_roster<S: StateTrait>(
    State(state): State<S>,
    user: AuthUser,
) -> Result<Json<Vec<PlayerView>>> {
    let coach = njcaa_coach_profiles::Entity::find_by_user(user.id)
        .one(state.db())
        .await?
        .ok_or(error::PROFILE_NOT_FOUND)?;

    let players = player_profiles::Entity::find()
        .filter(player_profiles::Column::CollegeId.eq(coach.college_id))
        .find_also_related(njcaa_colleges::Entity)
        .order_by_asc(player_profiles::Column::LastName)
        .order_by_asc(player_profiles::Column::FirstName)
        .all(state.db())
        .await?;

    Ok(Json(players.into_iter().map(PlayerView::from).collect()))
}
