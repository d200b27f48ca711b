mod create;
mod delete;
mod list;

use crate::{middlewares::RoleLayer, state::StateTrait};
use axum::{
    routing::{delete, get, post},
    Router,
};
use entity::users::UserType;
use serde::Deserialize;

/// Routes for the college reference data
///
/// GET    /colleges/njcaa
/// GET    /colleges/ncaa
/// POST   /colleges/njcaa      (admins)
/// POST   /colleges/ncaa       (admins)
/// DELETE /colleges/:kind/:id  (admins)
pub fn routes<S: StateTrait>() -> Router<S> {
    let admins = RoleLayer::new(&[UserType::Admin]);

    Router::new()
        .route(
            "/njcaa",
            get(list::list_njcaa::<S>)
                .merge(post(create::create_njcaa::<S>).layer(admins.clone())),
        )
        .route(
            "/ncaa",
            get(list::list_ncaa::<S>).merge(post(create::create_ncaa::<S>).layer(admins.clone())),
        )
        .route(
            "/:kind/:id",
            delete(delete::delete_college::<S>).layer(admins),
        )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Njcaa,
    Ncaa,
}
