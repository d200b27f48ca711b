use super::{coach_profile, visible_player};
use crate::{
    error::{self, DatabaseError, Result},
    extractors::{ActiveSubscription, Json, ValidatedJson},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use entity::coach_favorites::{self, Priority, RecruitingStatus};
use sea_orm::{ActiveModelTrait, Set};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct Request {
    player_id: Uuid,
    priority: Option<Priority>,
    status: Option<RecruitingStatus>,
    #[validate(length(max = 2000))]
    notes: Option<String>,
}

pub async fn create_favorite<S: StateTrait>(
    State(state): State<S>,
    ActiveSubscription(user): ActiveSubscription,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<coach_favorites::Model>)> {
    let coach = coach_profile(state.db(), &user).await?;
    let player = visible_player(state.db(), request.player_id).await?;

    let favorite = coach_favorites::ActiveModel {
        id: Set(Uuid::new_v4()),
        coach_profile_id: Set(coach.id),
        player_profile_id: Set(player.id),
        priority: Set(request.priority.unwrap_or_default()),
        status: Set(request.status.unwrap_or_default()),
        notes: Set(request.notes),
        ..Default::default()
    };

    let favorite = match favorite.insert(state.db()).await {
        Err(err) if err.unique_violation() => return Err(error::FAVORITE_EXISTS),
        r => r?,
    };

    Ok((StatusCode::CREATED, Json(favorite)))
}
