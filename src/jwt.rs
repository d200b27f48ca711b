use crate::error::{self, Result};
use chrono::{Duration, Utc};
use entity::users::UserType;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub role: UserType,
    pub iat: i64,
    pub exp: i64,
}

static VALIDATION: Lazy<Validation> = Lazy::new(|| {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 5;

    validation
});

/// Issues and checks HS256 access tokens.
pub struct Jwt {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl Jwt {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    pub fn issue(&self, user_id: Uuid, role: UserType) -> Result<String> {
        let now = Utc::now();

        let claims = Claims {
            sub: user_id,
            role,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(
            |error| {
                error!("failed to sign token: {:?}", error);
                error::INTERNAL
            },
        )
    }

    pub fn get_claims(&self, token: &str) -> Result<Claims> {
        match jsonwebtoken::decode(token, &self.decoding, &VALIDATION) {
            Ok(decoded) => Ok(decoded.claims),
            Err(error) => {
                warn!(error = error.to_string(), "tried invalid token");
                Err(error::JWT_INVALID_TOKEN)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_round_trips_claims() {
        let jwt = Jwt::new("secret", Duration::hours(1));
        let id = Uuid::new_v4();

        let token = jwt.issue(id, UserType::NjcaaCoach).unwrap();
        let claims = jwt.get_claims(&token).unwrap();

        assert_eq!(claims.sub, id);
        assert_eq!(claims.role, UserType::NjcaaCoach);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let issuer = Jwt::new("secret", Duration::hours(1));
        let verifier = Jwt::new("other", Duration::hours(1));

        let token = issuer.issue(Uuid::new_v4(), UserType::Player).unwrap();

        assert!(verifier.get_claims(&token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let jwt = Jwt::new("secret", Duration::hours(-1));

        let token = jwt.issue(Uuid::new_v4(), UserType::Coach).unwrap();

        assert!(jwt.get_claims(&token).is_err());
    }
}
