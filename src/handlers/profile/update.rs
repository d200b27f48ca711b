use super::{load_profile, Profile};
use crate::{
    error::{self, Result},
    extractors::{AuthUser, Json, ValidatedJson},
    utils::set_option,
    StateTrait,
};
use axum::extract::State;
use entity::{
    ncaa_colleges, njcaa_colleges,
    player_profiles::{Position, PreferredFoot},
};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, PaginatorTrait};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Fields a role does not have are ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 64))]
    first_name: Option<String>,
    #[validate(length(min = 1, max = 64))]
    last_name: Option<String>,
    college_id: Option<Uuid>,

    position: Option<Position>,
    #[validate(range(min = 2000, max = 2100))]
    graduation_year: Option<i16>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(range(min = 100, max = 250))]
    height_cm: Option<Option<i16>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(range(min = 30, max = 200))]
    weight_kg: Option<Option<i16>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(range(min = 0.0, max = 4.0))]
    gpa: Option<Option<f64>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    preferred_foot: Option<Option<PreferredFoot>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 2000))]
    bio: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(url, length(max = 512))]
    highlight_video_url: Option<Option<String>>,
    #[validate(range(min = 0))]
    games_played: Option<i32>,
    #[validate(range(min = 0))]
    goals: Option<i32>,
    #[validate(range(min = 0))]
    assists: Option<i32>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 64))]
    title: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 32))]
    phone: Option<Option<String>>,
}

pub async fn update_profile<S: StateTrait>(
    State(state): State<S>,
    user: AuthUser,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<Profile>> {
    let profile = load_profile(state.db(), &user)
        .await?
        .ok_or(error::PROFILE_NOT_FOUND)?;

    let profile = match profile {
        Profile::Player(model) => {
            if let Some(college_id) = request.college_id {
                ensure_njcaa_college(state.db(), college_id).await?;
            }

            let mut active_model = model.clone().into_active_model();
            active_model.first_name = set_option(request.first_name);
            active_model.last_name = set_option(request.last_name);
            active_model.college_id = set_option(request.college_id);
            active_model.position = set_option(request.position);
            active_model.graduation_year = set_option(request.graduation_year);
            active_model.height_cm = set_option(request.height_cm);
            active_model.weight_kg = set_option(request.weight_kg);
            active_model.gpa = set_option(request.gpa);
            active_model.preferred_foot = set_option(request.preferred_foot);
            active_model.bio = set_option(request.bio);
            active_model.highlight_video_url = set_option(request.highlight_video_url);
            active_model.games_played = set_option(request.games_played);
            active_model.goals = set_option(request.goals);
            active_model.assists = set_option(request.assists);

            // an update without changed columns is not a valid statement
            if !active_model.is_changed() {
                return Ok(Json(Profile::Player(model)));
            }

            Profile::Player(active_model.update(state.db()).await?)
        }
        Profile::Coach(model) => {
            if let Some(college_id) = request.college_id {
                let count = ncaa_colleges::Entity::find_by_id(college_id)
                    .count(state.db())
                    .await?;

                if count == 0 {
                    return Err(error::COLLEGE_NOT_FOUND);
                }
            }

            let mut active_model = model.clone().into_active_model();
            active_model.first_name = set_option(request.first_name);
            active_model.last_name = set_option(request.last_name);
            active_model.college_id = set_option(request.college_id);
            active_model.title = set_option(request.title);
            active_model.phone = set_option(request.phone);

            if !active_model.is_changed() {
                return Ok(Json(Profile::Coach(model)));
            }

            Profile::Coach(active_model.update(state.db()).await?)
        }
        Profile::NjcaaCoach(model) => {
            if let Some(college_id) = request.college_id {
                ensure_njcaa_college(state.db(), college_id).await?;
            }

            let mut active_model = model.clone().into_active_model();
            active_model.first_name = set_option(request.first_name);
            active_model.last_name = set_option(request.last_name);
            active_model.college_id = set_option(request.college_id);
            active_model.title = set_option(request.title);
            active_model.phone = set_option(request.phone);

            if !active_model.is_changed() {
                return Ok(Json(Profile::NjcaaCoach(model)));
            }

            Profile::NjcaaCoach(active_model.update(state.db()).await?)
        }
    };

    Ok(Json(profile))
}

async fn ensure_njcaa_college<C: ConnectionTrait>(db: &C, college_id: Uuid) -> Result {
    let count = njcaa_colleges::Entity::find_by_id(college_id)
        .count(db)
        .await?;

    if count == 0 {
        return Err(error::COLLEGE_NOT_FOUND);
    }

    Ok(())
}
