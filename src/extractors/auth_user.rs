use crate::{error, Claims, Error};
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use entity::users::UserType;
use uuid::Uuid;

/// The caller, as proven by a valid access token.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub id: Uuid,
    pub role: UserType,
}

impl AuthUser {
    #[inline]
    pub fn is(&self, role: UserType) -> bool {
        self.role == role
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(claims) = parts.extensions.get::<Claims>() else {
            return Err(error::COULD_NOT_GET_CLAIMS);
        };

        Ok(AuthUser {
            id: claims.sub,
            role: claims.role,
        })
    }
}
