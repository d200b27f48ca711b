mod auth_user;
mod json;
mod path;
mod query;
mod subscription;

pub use auth_user::*;
pub use json::*;
pub use path::*;
pub use query::*;
pub use subscription::*;
