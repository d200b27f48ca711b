use crate::{error::Result, extractors::Json, StateTrait};
use axum::extract::State;
use entity::subscription_plans;
use sea_orm::{EntityTrait, QueryOrder};

pub async fn list_plans<S: StateTrait>(
    State(state): State<S>,
) -> Result<Json<Vec<subscription_plans::Model>>> {
    let plans = subscription_plans::Entity::find_active()
        .order_by_asc(subscription_plans::Column::PriceInCents)
        .all(state.db())
        .await?;

    Ok(Json(plans))
}
