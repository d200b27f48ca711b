use super::njcaa_coach_profile;
use crate::{
    error::{self, DatabaseError, Result},
    extractors::{AuthUser, Json, ValidatedJson},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use entity::{player_evaluations, player_profiles};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QuerySelect, Set, TransactionTrait,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct Request {
    player_id: Uuid,
    #[validate(range(min = 1, max = 10))]
    technical: i16,
    #[validate(range(min = 1, max = 10))]
    tactical: i16,
    #[validate(range(min = 1, max = 10))]
    physical: i16,
    #[validate(range(min = 1, max = 10))]
    mental: i16,
    #[validate(range(min = 1, max = 10))]
    overall_rating: i16,
    #[validate(range(min = 1, max = 10))]
    potential: i16,
    #[validate(length(max = 2000))]
    strengths: Option<String>,
    #[validate(length(max = 2000))]
    weaknesses: Option<String>,
    #[validate(length(max = 4000))]
    notes: Option<String>,
}

/// Adds the next version of the player's evaluation and makes it current.
pub async fn create_evaluation<S: StateTrait>(
    State(state): State<S>,
    user: AuthUser,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<player_evaluations::Model>)> {
    let txn = state.db().begin().await?;

    let coach = njcaa_coach_profile(&txn, &user).await?;

    let player = player_profiles::Entity::find_by_id(request.player_id)
        .lock_exclusive()
        .one(&txn)
        .await?
        .ok_or(error::PLAYER_NOT_FOUND)?;

    if player.college_id != coach.college_id {
        warn!(
            coach_id = coach.id.to_string(),
            player_id = player.id.to_string(),
            "tried to evaluate a player of another college"
        );
        return Err(error::NOT_SAME_COLLEGE);
    }

    let latest: Option<i32> = player_evaluations::Entity::find_by_player(player.id)
        .select_only()
        .column_as(player_evaluations::Column::Version.max(), "version")
        .into_tuple::<Option<i32>>()
        .one(&txn)
        .await?
        .flatten();

    let evaluation = player_evaluations::ActiveModel {
        id: Set(Uuid::new_v4()),
        player_profile_id: Set(player.id),
        evaluator_id: Set(coach.id),
        version: Set(latest.unwrap_or(0) + 1),
        technical: Set(request.technical),
        tactical: Set(request.tactical),
        physical: Set(request.physical),
        mental: Set(request.mental),
        overall_rating: Set(request.overall_rating),
        potential: Set(request.potential),
        strengths: Set(request.strengths),
        weaknesses: Set(request.weaknesses),
        notes: Set(request.notes),
        // the entity hook demotes the previous current row
        is_current: Set(true),
        ..Default::default()
    }
    .insert(&txn)
    .await;

    let evaluation = match evaluation {
        Err(err) if err.unique_violation() => return Err(error::EVALUATION_CONFLICT),
        r => r?,
    };

    txn.commit().await?;

    Ok((StatusCode::CREATED, Json(evaluation)))
}
