#[macro_use]
extern crate tracing;

pub mod billing;
mod config;
pub mod error;
mod extractors;
mod handlers;
mod jwt;
mod middlewares;
mod state;
mod utils;

use crate::{middlewares::middlewares, utils::shutdown_signal};
pub use config::Config;
use error::Error;
pub use jwt::{Claims, Jwt};
pub use state::*;
use tokio::net::TcpListener;
pub use utils::{hash_password, verify_password};

pub async fn run<S: StateTrait>(listener: TcpListener, state: S) -> anyhow::Result<()> {
    info!("listening on port {}", listener.local_addr()?.port());

    let routes = handlers::routes::<S>();
    let app = middlewares(state, routes);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
