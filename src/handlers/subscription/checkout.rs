use crate::{
    billing::CheckoutRequest,
    error::{self, DatabaseError, Result},
    extractors::{AuthUser, Json, ValidatedJson},
    StateTrait,
};
use axum::extract::State;
use chrono::Utc;
use entity::{
    subscription_plans,
    user_subscriptions::{self, Status},
    users,
};
use sea_orm::{
    ActiveModelTrait, EntityTrait, IntoActiveModel, QuerySelect, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct Request {
    plan_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct Response {
    checkout_url: String,
    session_id: String,
}

/// Starts a hosted checkout. The local record stays `incomplete` until the
/// provider confirms the payment through a webhook.
pub async fn checkout<S: StateTrait>(
    State(state): State<S>,
    user: AuthUser,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<Response>> {
    let plan = subscription_plans::Entity::find_by_id(request.plan_id)
        .one(state.db())
        .await?
        .ok_or(error::PLAN_NOT_FOUND)?;

    let price_id = match (&plan.provider_price_id, plan.is_active) {
        (Some(price_id), true) => price_id.as_str(),
        _ => return Err(error::PLAN_NOT_AVAILABLE),
    };

    let existing = user_subscriptions::Entity::find_by_user(user.id)
        .one(state.db())
        .await?;

    if existing
        .as_ref()
        .is_some_and(|subscription| subscription.grants_access(Utc::now()))
    {
        return Err(error::ALREADY_SUBSCRIBED);
    }

    let customer_id = match &existing {
        Some(subscription) => subscription.provider_customer_id.clone(),
        None => {
            let account = users::Entity::find_by_id(user.id)
                .one(state.db())
                .await?
                .ok_or(error::USER_NOT_FOUND)?;

            state.billing().create_customer(&account.email, user.id).await?
        }
    };

    let session = state
        .billing()
        .create_checkout_session(CheckoutRequest {
            customer_id: &customer_id,
            price_id,
            user_id: user.id,
            plan_id: plan.id,
        })
        .await?;

    let txn = state.db().begin().await?;

    let current = user_subscriptions::Entity::find_by_user(user.id)
        .lock_exclusive()
        .one(&txn)
        .await?;

    let res = match current {
        Some(subscription) => {
            let mut active_model = subscription.into_active_model();
            active_model.plan_id = Set(plan.id);
            active_model.status = Set(Status::Incomplete);
            active_model.provider_customer_id = Set(customer_id);
            active_model.provider_subscription_id = Set(None);
            active_model.current_period_end = Set(None);
            active_model.cancel_at_period_end = Set(false);
            active_model.update(&txn).await
        }
        None => {
            user_subscriptions::ActiveModel {
                id: Set(Uuid::new_v4()),
                user_id: Set(user.id),
                plan_id: Set(plan.id),
                status: Set(Status::Incomplete),
                provider_customer_id: Set(customer_id),
                provider_subscription_id: Set(None),
                current_period_end: Set(None),
                cancel_at_period_end: Set(false),
                ..Default::default()
            }
            .insert(&txn)
            .await
        }
    };

    if let Err(err) = res {
        if err.unique_violation() {
            return Err(error::ALREADY_SUBSCRIBED);
        }
        return Err(err.into());
    }

    txn.commit().await?;

    info!(
        user_id = user.id.to_string(),
        plan_id = plan.id.to_string(),
        session_id = session.id,
        "started checkout"
    );

    Ok(Json(Response {
        checkout_url: session.url,
        session_id: session.id,
    }))
}
