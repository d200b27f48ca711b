mod users;

use crate::{middlewares::RoleLayer, state::StateTrait};
use axum::{
    routing::{delete, get},
    Router,
};
use entity::users::UserType;

/// Routes for administrators
///
/// GET    /admin/users
/// DELETE /admin/users/:id
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/users", get(users::list_users::<S>))
        .route("/users/:id", delete(users::delete_user::<S>))
        .route_layer(RoleLayer::new(&[UserType::Admin]))
}
