use entity::users::UserType;
use uuid::Uuid;

/// A registered account with a valid access token.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub role: UserType,
    pub token: String,
}
