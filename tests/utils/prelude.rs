#![allow(unused_imports)]

pub(crate) use super::macros::*;
pub use super::{request::*, response::*, user::User, App};
pub use assert_json_diff::{assert_json_eq, assert_json_include};
pub use entity::users::UserType;
pub use http::StatusCode;
pub use portall_backend::error;
pub use serde_json::{json, Value};
pub use serial_test::serial;
pub use uuid::Uuid;
