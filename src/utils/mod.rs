mod orm;
mod password;
mod signal;
mod token;

pub use orm::*;
pub use password::*;
pub use signal::*;
pub use token::*;
