use super::json::validate;
use crate::{error, Error};
use axum::{
    async_trait,
    extract::{FromRequestParts, Query as AxumQuery},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query string extractor that validates and reports failures as JSON.
pub struct Query<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AxumQuery(query) = AxumQuery::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                debug!("rejected query string: {}", rejection.body_text());
                error::INVALID_QUERY
            })?;

        validate(&query)?;

        Ok(Self(query))
    }
}
