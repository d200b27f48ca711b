use super::njcaa_coach_profile;
use crate::{
    error::{self, Result},
    extractors::{AuthUser, Json, Path, ValidatedJson},
    utils::set_option,
    StateTrait,
};
use axum::extract::State;
use entity::player_evaluations;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, QuerySelect, Set, TransactionTrait};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct Request {
    #[validate(range(min = 1, max = 10))]
    technical: Option<i16>,
    #[validate(range(min = 1, max = 10))]
    tactical: Option<i16>,
    #[validate(range(min = 1, max = 10))]
    physical: Option<i16>,
    #[validate(range(min = 1, max = 10))]
    mental: Option<i16>,
    #[validate(range(min = 1, max = 10))]
    overall_rating: Option<i16>,
    #[validate(range(min = 1, max = 10))]
    potential: Option<i16>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 2000))]
    strengths: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 2000))]
    weaknesses: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 4000))]
    notes: Option<Option<String>>,
    /// Only `true` has an effect: it promotes this version to current.
    is_current: Option<bool>,
}

pub async fn update_evaluation<S: StateTrait>(
    State(state): State<S>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<player_evaluations::Model>> {
    let txn = state.db().begin().await?;

    let evaluation = player_evaluations::Entity::find_by_id(id)
        .lock_exclusive()
        .one(&txn)
        .await?
        .ok_or(error::EVALUATION_NOT_FOUND)?;

    let coach = njcaa_coach_profile(&txn, &user).await?;

    if evaluation.evaluator_id != coach.id {
        warn!(
            coach_id = coach.id.to_string(),
            evaluation_id = evaluation.id.to_string(),
            "tried to edit another coach's evaluation"
        );
        return Err(error::NOT_EVALUATION_AUTHOR);
    }

    let mut active_model = evaluation.clone().into_active_model();
    active_model.technical = set_option(request.technical);
    active_model.tactical = set_option(request.tactical);
    active_model.physical = set_option(request.physical);
    active_model.mental = set_option(request.mental);
    active_model.overall_rating = set_option(request.overall_rating);
    active_model.potential = set_option(request.potential);
    active_model.strengths = set_option(request.strengths);
    active_model.weaknesses = set_option(request.weaknesses);
    active_model.notes = set_option(request.notes);

    if request.is_current == Some(true) && !evaluation.is_current {
        // the entity hook demotes the current version in this transaction
        active_model.is_current = Set(true);
    }

    if !active_model.is_changed() {
        return Ok(Json(evaluation));
    }

    let evaluation = active_model.update(&txn).await?;

    txn.commit().await?;

    Ok(Json(evaluation))
}
