use crate::{error, Claims};
use axum::{
    http::Request,
    response::{IntoResponse, Response},
};
use entity::users::UserType;
use futures::future::{self, Either, Ready};
use std::{
    convert::Infallible,
    task::{Context, Poll},
};
use tower::{Layer, Service};

type RoleList = &'static [UserType];

/// Restricts the wrapped routes to the listed roles. Anonymous callers get
/// 401, everybody else outside the list 403.
#[derive(Debug, Clone)]
pub struct RoleLayer {
    roles: RoleList,
}

impl RoleLayer {
    pub const fn new(roles: RoleList) -> Self {
        Self { roles }
    }
}

impl<S> Layer<S> for RoleLayer {
    type Service = Roles<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Roles::new(inner, self.roles)
    }
}

#[derive(Debug, Clone)]
pub struct Roles<S> {
    inner: S,
    roles: RoleList,
}

impl<S> Roles<S> {
    fn new(inner: S, roles: RoleList) -> Self {
        Roles { inner, roles }
    }
}

impl<S, B> Service<Request<B>> for Roles<S>
where
    S: Service<Request<B>, Error = Infallible, Response = Response>,
{
    type Response = Response;
    type Error = Infallible;
    type Future = Either<S::Future, Ready<Result<Response, Infallible>>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        let Some(claims) = req.extensions().get::<Claims>() else {
            return Either::Right(future::ok(error::COULD_NOT_GET_CLAIMS.into_response()));
        };

        if !self.roles.contains(&claims.role) {
            warn!(
                user_id = claims.sub.to_string(),
                role = claims.role.as_str(),
                "tried to access a route outside of its role"
            );
            return Either::Right(future::ok(error::FORBIDDEN_ROLE.into_response()));
        }

        Either::Left(self.inner.call(req))
    }
}
