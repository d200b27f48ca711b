mod get;
mod update;
mod visibility;

use crate::{error::Result, extractors::AuthUser, middlewares::RoleLayer, state::StateTrait};
use axum::{
    routing::{get, put},
    Router,
};
use entity::{coach_profiles, njcaa_coach_profiles, player_profiles, users::UserType};
use sea_orm::{ConnectionTrait, EntityTrait};
use serde::Serialize;

/// Routes for the caller's own profile
///
/// GET   /profile
/// PATCH /profile
/// PUT   /profile/visibility (players)
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route(
            "/",
            get(get::get_profile::<S>).patch(update::update_profile::<S>),
        )
        .route(
            "/visibility",
            put(visibility::set_visibility::<S>).layer(RoleLayer::new(&[UserType::Player])),
        )
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Profile {
    Player(player_profiles::Model),
    Coach(coach_profiles::Model),
    NjcaaCoach(njcaa_coach_profiles::Model),
}

/// The profile row of the table matching the user's role. Admins have none.
pub async fn load_profile<C>(db: &C, user: &AuthUser) -> Result<Option<Profile>>
where
    C: ConnectionTrait,
{
    let profile = match user.role {
        UserType::Player => player_profiles::Entity::find_by_user(user.id)
            .one(db)
            .await?
            .map(Profile::Player),
        UserType::Coach => coach_profiles::Entity::find_by_user(user.id)
            .one(db)
            .await?
            .map(Profile::Coach),
        UserType::NjcaaCoach => njcaa_coach_profiles::Entity::find_by_user(user.id)
            .one(db)
            .await?
            .map(Profile::NjcaaCoach),
        UserType::Admin => None,
    };

    Ok(profile)
}
