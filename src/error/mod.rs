mod constants;
mod db;

pub use constants::*;
pub use db::*;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::{BufMut, Bytes, BytesMut};
use sea_orm::DbErr;
use serde_json::{json, Value};

#[derive(Debug)]
pub struct Error<'a> {
    status: StatusCode,
    code: &'static str,
    message: &'a str,
    details: Option<Value>,
}

pub type Result<T = ()> = std::result::Result<T, Error<'static>>;

impl<'a> Error<'a> {
    #[inline]
    const fn new(status: StatusCode, code: &'static str, message: &'a str) -> Error<'a> {
        Self {
            status,
            code,
            message,
            details: None,
        }
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    #[inline]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    #[inline]
    pub const fn message(&self) -> &str {
        self.message
    }

    #[inline]
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attaches machine readable context, e.g. per-field validation messages.
    #[inline]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(128).writer();

        let body = match &self.details {
            Some(details) => json!({
                "code": self.code(),
                "error": self.message(),
                "details": details,
            }),
            None => json!({
                "code": self.code(),
                "error": self.message(),
            }),
        };

        if let Err(error) = serde_json::to_writer(&mut buf, &body) {
            error!("failed to serialize error: {:?}", error);
        }

        buf.into_inner().freeze()
    }
}

impl IntoResponse for Error<'_> {
    #[inline]
    fn into_response(self) -> Response {
        let buf = self.to_bytes();
        let mut res = (self.status, buf).into_response();

        res.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(mime::APPLICATION_JSON.as_ref()),
        );

        res
    }
}

impl From<DbErr> for Error<'_> {
    #[inline]
    fn from(error: DbErr) -> Self {
        error!("database error: {:?}", error);
        constants::DATABASE_ERROR
    }
}

impl From<serde_json::Error> for Error<'_> {
    #[inline]
    fn from(error: serde_json::Error) -> Self {
        error!("failed to deserialize json: {:?}", error);
        constants::JSON_DESERIALIZE
    }
}

impl From<anyhow::Error> for Error<'_> {
    #[inline]
    fn from(error: anyhow::Error) -> Self {
        error!("billing provider error: {:#}", error);
        constants::BILLING_ERROR
    }
}

macro_rules! const_error {
    ($name:ident, $status:ident, $code:literal, $msg:literal) => {
        pub const $name: $crate::error::Error<'static> =
            $crate::error::Error::new(::axum::http::StatusCode::$status, $code, $msg);
    };
}

#[allow(clippy::useless_attribute)]
#[allow(clippy::needless_pub_self)]
pub(self) use const_error;
