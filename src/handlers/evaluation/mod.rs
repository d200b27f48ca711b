mod create;
mod current;
mod list;
mod update;

use crate::{
    error::{self, Result},
    extractors::AuthUser,
    middlewares::RoleLayer,
    state::StateTrait,
};
use axum::{
    routing::{get, patch, post},
    Router,
};
use entity::{njcaa_coach_profiles, users::UserType};
use sea_orm::{ConnectionTrait, EntityTrait};

/// Routes for player evaluations
///
/// POST  /evaluations                         (NJCAA coaches)
/// PATCH /evaluations/:id                     (the author)
/// GET   /players/:id/evaluations
/// GET   /players/:id/evaluations/current
pub fn routes<S: StateTrait>() -> Router<S> {
    let authors = RoleLayer::new(&[UserType::NjcaaCoach]);

    Router::new()
        .route(
            "/evaluations",
            post(create::create_evaluation::<S>).layer(authors.clone()),
        )
        .route(
            "/evaluations/:id",
            patch(update::update_evaluation::<S>).layer(authors),
        )
        .route(
            "/players/:id/evaluations",
            get(list::list_evaluations::<S>),
        )
        .route(
            "/players/:id/evaluations/current",
            get(current::current_evaluation::<S>),
        )
}

async fn njcaa_coach_profile<C>(db: &C, user: &AuthUser) -> Result<njcaa_coach_profiles::Model>
where
    C: ConnectionTrait,
{
    njcaa_coach_profiles::Entity::find_by_user(user.id)
        .one(db)
        .await?
        .ok_or(error::PROFILE_NOT_FOUND)
}

/// Error for callers who may not read a player's evaluations.
fn denied(user: &AuthUser) -> error::Error<'static> {
    if user.is(UserType::NjcaaCoach) {
        error::NOT_SAME_COLLEGE
    } else {
        error::FORBIDDEN_ROLE
    }
}
