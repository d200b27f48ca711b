mod forgot_password;
mod login;
mod me;
mod register;
mod reset_password;
mod verify;

use crate::state::StateTrait;
use axum::{
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use entity::users::{self, UserType};
use serde::Serialize;
use uuid::Uuid;

/// Routes for accounts
///
/// POST /auth/register
/// POST /auth/login
/// POST /auth/verify
/// POST /auth/forgot-password
/// POST /auth/reset-password
/// GET  /auth/me
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/register", post(register::register::<S>))
        .route("/login", post(login::login::<S>))
        .route("/verify", post(verify::verify_email::<S>))
        .route(
            "/forgot-password",
            post(forgot_password::forgot_password::<S>),
        )
        .route("/reset-password", post(reset_password::reset_password::<S>))
        .route("/me", get(me::me::<S>))
}

/// A user without its secrets.
#[derive(Debug, Serialize)]
pub struct UserView {
    pub id: Uuid,
    pub email: String,
    pub user_type: UserType,
    pub is_verified: bool,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<users::Model> for UserView {
    fn from(user: users::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            user_type: user.user_type,
            is_verified: user.is_verified,
            last_login_at: user.last_login_at,
            created_at: user.created_at,
        }
    }
}
