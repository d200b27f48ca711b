use super::coach_profile;
use crate::{
    error::{self, Result},
    extractors::{ActiveSubscription, Json, Path, ValidatedJson},
    utils::set_option,
    StateTrait,
};
use axum::extract::State;
use entity::coach_favorites::{self, Priority, RecruitingStatus};
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct Request {
    priority: Option<Priority>,
    status: Option<RecruitingStatus>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 2000))]
    notes: Option<Option<String>>,
}

pub async fn update_favorite<S: StateTrait>(
    State(state): State<S>,
    ActiveSubscription(user): ActiveSubscription,
    Path(player_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<coach_favorites::Model>> {
    let coach = coach_profile(state.db(), &user).await?;

    let favorite = coach_favorites::Entity::find_pair(coach.id, player_id)
        .one(state.db())
        .await?
        .ok_or(error::FAVORITE_NOT_FOUND)?;

    if request.priority.is_none() && request.status.is_none() && request.notes.is_none() {
        return Ok(Json(favorite));
    }

    let mut active_model = favorite.into_active_model();
    active_model.priority = set_option(request.priority);
    active_model.status = set_option(request.status);
    active_model.notes = set_option(request.notes);

    Ok(Json(active_model.update(state.db()).await?))
}
