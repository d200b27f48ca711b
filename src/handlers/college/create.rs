use crate::{
    error::{self, DatabaseError, Result},
    extractors::{Json, ValidatedJson},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use entity::{ncaa_colleges, njcaa_colleges};
use sea_orm::{ActiveModelTrait, DbErr, Set};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct NjcaaRequest {
    #[validate(length(min = 1, max = 128))]
    name: String,
    #[validate(length(equal = 2))]
    state: String,
    #[validate(range(min = 1, max = 24))]
    region: i16,
    division: njcaa_colleges::Division,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NcaaRequest {
    #[validate(length(min = 1, max = 128))]
    name: String,
    #[validate(length(equal = 2))]
    state: String,
    division: ncaa_colleges::Division,
    #[validate(length(min = 1, max = 64))]
    conference: Option<String>,
}

pub async fn create_njcaa<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<NjcaaRequest>,
) -> Result<(StatusCode, Json<njcaa_colleges::Model>)> {
    let college = njcaa_colleges::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(request.name),
        state: Set(request.state.to_uppercase()),
        region: Set(request.region),
        division: Set(request.division),
        ..Default::default()
    }
    .insert(state.db())
    .await
    .map_err(duplicate)?;

    info!(college_id = college.id.to_string(), "created NJCAA college");

    Ok((StatusCode::CREATED, Json(college)))
}

pub async fn create_ncaa<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<NcaaRequest>,
) -> Result<(StatusCode, Json<ncaa_colleges::Model>)> {
    let college = ncaa_colleges::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(request.name),
        state: Set(request.state.to_uppercase()),
        division: Set(request.division),
        conference: Set(request.conference),
        ..Default::default()
    }
    .insert(state.db())
    .await
    .map_err(duplicate)?;

    info!(college_id = college.id.to_string(), "created NCAA college");

    Ok((StatusCode::CREATED, Json(college)))
}

fn duplicate(err: DbErr) -> error::Error<'static> {
    if err.unique_violation() {
        error::COLLEGE_EXISTS
    } else {
        err.into()
    }
}
