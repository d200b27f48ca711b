use super::coach_profile;
use crate::{
    error::Result,
    extractors::{ActiveSubscription, Json, Query},
    StateTrait,
};
use axum::extract::State;
use entity::{
    coach_favorites::{self, Priority, RecruitingStatus},
    player_profiles,
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct FavoriteQuery {
    status: Option<RecruitingStatus>,
    priority: Option<Priority>,
}

#[derive(Serialize)]
pub struct FavoriteView {
    #[serde(flatten)]
    favorite: coach_favorites::Model,
    player: Option<player_profiles::Model>,
}

pub async fn list_favorites<S: StateTrait>(
    State(state): State<S>,
    ActiveSubscription(user): ActiveSubscription,
    Query(query): Query<FavoriteQuery>,
) -> Result<Json<Vec<FavoriteView>>> {
    let coach = coach_profile(state.db(), &user).await?;

    let mut select = coach_favorites::Entity::find_by_coach(coach.id)
        .find_also_related(player_profiles::Entity)
        .order_by_desc(coach_favorites::Column::UpdatedAt);

    if let Some(status) = query.status {
        select = select.filter(coach_favorites::Column::Status.eq(status));
    }

    if let Some(priority) = query.priority {
        select = select.filter(coach_favorites::Column::Priority.eq(priority));
    }

    let favorites = select
        .all(state.db())
        .await?
        .into_iter()
        .map(|(favorite, player)| FavoriteView { favorite, player })
        .collect();

    Ok(Json(favorites))
}
