use super::coach_profile;
use crate::{
    error::{self, Result},
    extractors::{ActiveSubscription, Path},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use entity::coach_favorites;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

pub async fn delete_favorite<S: StateTrait>(
    State(state): State<S>,
    ActiveSubscription(user): ActiveSubscription,
    Path(player_id): Path<Uuid>,
) -> Result<StatusCode> {
    let coach = coach_profile(state.db(), &user).await?;

    let res = coach_favorites::Entity::delete_many()
        .filter(coach_favorites::Column::CoachProfileId.eq(coach.id))
        .filter(coach_favorites::Column::PlayerProfileId.eq(player_id))
        .exec(state.db())
        .await?;

    if res.rows_affected == 0 {
        return Err(error::FAVORITE_NOT_FOUND);
    }

    Ok(StatusCode::NO_CONTENT)
}
