mod admin;
mod auth;
mod college;
mod evaluation;
mod favorite;
mod player;
mod profile;
mod subscription;

use crate::{error::Result, state::StateTrait};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use sea_orm::ConnectionTrait;

pub fn routes<S: StateTrait>() -> Router<S> {
    let v1 = Router::new()
        .nest("/auth", auth::routes::<S>())
        .nest("/colleges", college::routes::<S>())
        .nest("/profile", profile::routes::<S>())
        .nest("/favorites", favorite::routes::<S>())
        .nest("/subscriptions", subscription::routes::<S>())
        .nest("/admin", admin::routes::<S>())
        .merge(player::routes::<S>())
        .merge(evaluation::routes::<S>())
        .route("/webhooks/billing", post(subscription::billing_webhook::<S>));

    Router::new()
        .nest("/v1", v1)
        .route("/livez", get(liveness::<S>))
        .route("/readyz", get(|| async {}))
}

async fn liveness<S: StateTrait>(State(state): State<S>) -> Result<StatusCode> {
    state.db().execute_unprepared("select 1").await?;
    Ok(StatusCode::OK)
}
