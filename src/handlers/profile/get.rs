use super::{load_profile, Profile};
use crate::{
    error::{self, Result},
    extractors::{AuthUser, Json},
    StateTrait,
};
use axum::extract::State;

pub async fn get_profile<S: StateTrait>(
    State(state): State<S>,
    user: AuthUser,
) -> Result<Json<Profile>> {
    load_profile(state.db(), &user)
        .await?
        .map(Json)
        .ok_or(error::PROFILE_NOT_FOUND)
}
