pub mod billing;
pub mod macros;
pub mod prelude;
mod request;
mod response;
pub mod setup;
pub mod user;

pub use setup::App;
