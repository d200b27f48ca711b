mod create;
mod delete;
mod list;
mod toggle;
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
use entity::{coach_profiles, player_profiles, users::UserType};
use sea_orm::{ConnectionTrait, EntityTrait};
use uuid::Uuid;

/// Routes for a coach's recruiting board, all of them need a subscription
///
/// GET    /favorites
/// POST   /favorites
/// PATCH  /favorites/:player_id
/// DELETE /favorites/:player_id
/// POST   /favorites/:player_id/toggle
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route(
            "/",
            get(list::list_favorites::<S>).post(create::create_favorite::<S>),
        )
        .route(
            "/:player_id",
            patch(update::update_favorite::<S>).delete(delete::delete_favorite::<S>),
        )
        .route("/:player_id/toggle", post(toggle::toggle_favorite::<S>))
        .route_layer(RoleLayer::new(&[UserType::Coach]))
}

async fn coach_profile<C>(db: &C, user: &AuthUser) -> Result<coach_profiles::Model>
where
    C: ConnectionTrait,
{
    coach_profiles::Entity::find_by_user(user.id)
        .one(db)
        .await?
        .ok_or(error::PROFILE_NOT_FOUND)
}

/// Only players who opted in can be bookmarked.
async fn visible_player<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<player_profiles::Model> {
    match player_profiles::Entity::find_by_id(id).one(db).await? {
        Some(player) if player.is_visible => Ok(player),
        _ => Err(error::PLAYER_NOT_FOUND),
    }
}
