use crate::error::{self, Result};

/// Hashes on the blocking pool, bcrypt is deliberately slow.
pub async fn hash_password(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await
        .map_err(|error| {
            error!("password hashing task failed: {:?}", error);
            error::INTERNAL
        })?
        .map_err(|error| {
            error!("failed to hash password: {:?}", error);
            error::INTERNAL
        })
}

pub async fn verify_password(password: String, hash: String) -> Result<bool> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|error| {
            error!("password verification task failed: {:?}", error);
            error::INTERNAL
        })?
        .or_else(|error| {
            warn!("stored password hash is malformed: {:?}", error);
            Ok(false)
        })
}
