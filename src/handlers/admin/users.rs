use crate::{
    error::{self, Result},
    extractors::{AuthUser, Json, Path, Query},
    handlers::auth::UserView,
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use entity::users::{self, UserType};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct UsersQuery {
    user_type: Option<UserType>,
}

pub async fn list_users<S: StateTrait>(
    State(state): State<S>,
    Query(query): Query<UsersQuery>,
) -> Result<Json<Vec<UserView>>> {
    let mut select = users::Entity::find().order_by_asc(users::Column::CreatedAt);

    if let Some(user_type) = query.user_type {
        select = select.filter(users::Column::UserType.eq(user_type));
    }

    let users = select.all(state.db()).await?;

    Ok(Json(users.into_iter().map(UserView::from).collect()))
}

/// Profiles, favorites, evaluations and subscriptions go with the user.
pub async fn delete_user<S: StateTrait>(
    State(state): State<S>,
    admin: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    let res = users::Entity::delete_by_id(id).exec(state.db()).await?;

    if res.rows_affected == 0 {
        return Err(error::USER_NOT_FOUND);
    }

    info!(
        admin_id = admin.id.to_string(),
        user_id = id.to_string(),
        "deleted user"
    );

    Ok(StatusCode::NO_CONTENT)
}
