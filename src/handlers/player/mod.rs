mod get;
mod roster;
mod search;

use crate::{error::Result, extractors::AuthUser, middlewares::RoleLayer, state::StateTrait};
use axum::{routing::get, Router};
use entity::{njcaa_coach_profiles, njcaa_colleges, player_profiles, users::UserType};
use sea_orm::{ConnectionTrait, EntityTrait};
use serde::Serialize;

/// Routes for discovering players
///
/// GET /players            (coaches with a subscription, NJCAA coaches, admins)
/// GET /players/:id
/// GET /njcaa/roster       (NJCAA coaches)
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route(
            "/players",
            get(search::search_players::<S>).layer(RoleLayer::new(&[
                UserType::Coach,
                UserType::NjcaaCoach,
                UserType::Admin,
            ])),
        )
        .route("/players/:id", get(get::get_player::<S>))
        .route(
            "/njcaa/roster",
            get(roster::get_roster::<S>).layer(RoleLayer::new(&[UserType::NjcaaCoach])),
        )
}

#[derive(Debug, Serialize)]
pub struct PlayerView {
    #[serde(flatten)]
    pub profile: player_profiles::Model,
    pub college: Option<njcaa_colleges::Model>,
}

impl From<(player_profiles::Model, Option<njcaa_colleges::Model>)> for PlayerView {
    fn from((profile, college): (player_profiles::Model, Option<njcaa_colleges::Model>)) -> Self {
        Self { profile, college }
    }
}

/// Whether the caller may see the profile regardless of its visibility: the
/// player itself, an NJCAA coach of the player's college, or an admin.
pub async fn has_full_access<C>(
    db: &C,
    user: &AuthUser,
    profile: &player_profiles::Model,
) -> Result<bool>
where
    C: ConnectionTrait,
{
    let allowed = match user.role {
        UserType::Admin => true,
        UserType::Player => profile.user_id == user.id,
        UserType::NjcaaCoach => njcaa_coach_profiles::Entity::find_by_user(user.id)
            .one(db)
            .await?
            .is_some_and(|coach| coach.college_id == profile.college_id),
        UserType::Coach => false,
    };

    Ok(allowed)
}
