use crate::{
    billing::webhook::{self, CheckoutSession, Event, Invoice, Subscription},
    error::{self, DatabaseError, Result},
    extractors::Json,
    StateTrait,
};
use axum::{extract::State, http::HeaderMap};
use bytes::Bytes;
use chrono::{DateTime, TimeZone, Utc};
use entity::{
    payment_history::{self, PaymentStatus},
    user_subscriptions::{self, Status},
};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, PaginatorTrait, QuerySelect,
    Set, TransactionTrait,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use uuid::Uuid;

const SIGNATURE_HEADER: &str = "stripe-signature";

/// Applies a signed billing event to the local subscription mirror.
pub async fn billing_webhook<S: StateTrait>(
    State(state): State<S>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>> {
    let Some(signature) = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok())
    else {
        warn!("billing webhook without a signature");
        return Err(error::INVALID_SIGNATURE);
    };

    let now = Utc::now().timestamp();
    if let Err(err) = webhook::verify_signature(
        signature,
        &body,
        &state.config().stripe_webhook_secret,
        now,
    ) {
        warn!("billing webhook with an invalid signature");
        return Err(err);
    }

    let event: Event = serde_json::from_slice(&body).map_err(|err| {
        debug!("malformed billing event: {err}");
        error::JSON_SYNTAX_ERROR
    })?;

    debug!(event_id = event.id, kind = event.kind, "received billing event");

    let kind = event.kind.clone();
    let txn = state.db().begin().await?;

    match kind.as_str() {
        "checkout.session.completed" => checkout_completed(&txn, object(event)?).await?,
        "customer.subscription.created" | "customer.subscription.updated" => {
            subscription_changed(&txn, object(event)?, false).await?
        }
        "customer.subscription.deleted" => {
            subscription_changed(&txn, object(event)?, true).await?
        }
        "invoice.paid" | "invoice.payment_succeeded" => {
            record_payment(&txn, object(event)?, PaymentStatus::Succeeded).await?
        }
        "invoice.payment_failed" => {
            record_payment(&txn, object(event)?, PaymentStatus::Failed).await?
        }
        kind => debug!(kind, "ignored billing event"),
    }

    txn.commit().await?;

    Ok(Json(json!({ "received": true })))
}

fn object<T: DeserializeOwned>(event: Event) -> Result<T> {
    serde_json::from_value(event.data.object).map_err(|err| {
        warn!(event_id = event.id, "unexpected billing object: {err}");
        error::JSON_MISSING_FIELDS
    })
}

fn timestamp(secs: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(secs, 0).single()
}

/// Finds the local record by provider subscription id, then by customer.
async fn find_subscription<C: ConnectionTrait>(
    db: &C,
    subscription_id: Option<&str>,
    customer_id: Option<&str>,
) -> Result<Option<user_subscriptions::Model>> {
    if let Some(id) = subscription_id {
        let found = user_subscriptions::Entity::find_by_provider_subscription(id)
            .lock_exclusive()
            .one(db)
            .await?;

        if found.is_some() {
            return Ok(found);
        }
    }

    let Some(customer_id) = customer_id else {
        return Ok(None);
    };

    Ok(user_subscriptions::Entity::find_by_provider_customer(customer_id)
        .lock_exclusive()
        .one(db)
        .await?)
}

async fn checkout_completed<C: ConnectionTrait>(db: &C, session: CheckoutSession) -> Result {
    let user_id = session
        .metadata
        .get("user_id")
        .or(session.client_reference_id.as_ref())
        .and_then(|id| id.parse::<Uuid>().ok());

    let subscription = match user_id {
        Some(user_id) => {
            user_subscriptions::Entity::find_by_user(user_id)
                .lock_exclusive()
                .one(db)
                .await?
        }
        None => find_subscription(db, None, session.customer.as_deref()).await?,
    };

    let Some(subscription) = subscription else {
        warn!(
            customer = session.customer,
            "completed checkout for an unknown subscription"
        );
        return Ok(());
    };

    let plan_id = session
        .metadata
        .get("plan_id")
        .and_then(|id| id.parse::<Uuid>().ok());

    let user_id = subscription.user_id;
    let mut active_model = subscription.into_active_model();
    active_model.status = Set(Status::Active);

    if let Some(provider_id) = session.subscription {
        active_model.provider_subscription_id = Set(Some(provider_id));
    }

    if let Some(plan_id) = plan_id {
        active_model.plan_id = Set(plan_id);
    }

    active_model.update(db).await?;

    info!(user_id = user_id.to_string(), "activated subscription");

    Ok(())
}

async fn subscription_changed<C: ConnectionTrait>(
    db: &C,
    remote: Subscription,
    deleted: bool,
) -> Result {
    let Some(subscription) =
        find_subscription(db, Some(&remote.id), Some(&remote.customer)).await?
    else {
        warn!(
            subscription = remote.id,
            "billing event for an unknown subscription"
        );
        return Ok(());
    };

    let status = if deleted {
        Some(Status::Canceled)
    } else {
        Status::from_provider(&remote.status)
    };

    let user_id = subscription.user_id;
    let mut active_model = subscription.into_active_model();
    active_model.provider_subscription_id = Set(Some(remote.id));
    active_model.cancel_at_period_end = Set(remote.cancel_at_period_end);

    match status {
        Some(status) => active_model.status = Set(status),
        None => warn!(status = remote.status, "unknown subscription status"),
    }

    if let Some(end) = remote.current_period_end {
        active_model.current_period_end = Set(timestamp(end));
    }

    let subscription = active_model.update(db).await?;

    info!(
        user_id = user_id.to_string(),
        status = ?subscription.status,
        "updated subscription"
    );

    Ok(())
}

async fn record_payment<C: ConnectionTrait>(
    db: &C,
    invoice: Invoice,
    status: PaymentStatus,
) -> Result {
    let Some(subscription) = find_subscription(
        db,
        invoice.subscription.as_deref(),
        invoice.customer.as_deref(),
    )
    .await?
    else {
        warn!(invoice = invoice.id, "invoice for an unknown subscription");
        return Ok(());
    };

    let recorded = payment_history::Entity::find_by_invoice(&invoice.id, status)
        .count(db)
        .await?;

    if recorded > 0 {
        debug!(invoice = invoice.id, "invoice already recorded");
        return Ok(());
    }

    let amount = match status {
        PaymentStatus::Succeeded => invoice.amount_paid,
        PaymentStatus::Failed => invoice.amount_due,
    };

    let Ok(amount_in_cents) = i32::try_from(amount) else {
        warn!(invoice = invoice.id, amount, "invoice amount out of range");
        return Err(error::JSON_VALIDATE_INVALID);
    };

    let paid_at = match status {
        PaymentStatus::Succeeded => invoice
            .status_transitions
            .and_then(|transitions| transitions.paid_at)
            .and_then(timestamp)
            .or_else(|| Some(Utc::now())),
        PaymentStatus::Failed => None,
    };

    let res = payment_history::ActiveModel {
        id: Set(Uuid::new_v4()),
        subscription_id: Set(subscription.id),
        provider_invoice_id: Set(invoice.id.clone()),
        amount_in_cents: Set(amount_in_cents),
        currency: Set(invoice.currency.to_lowercase()),
        status: Set(status),
        paid_at: Set(paid_at),
        ..Default::default()
    }
    .insert(db)
    .await;

    if let Err(err) = res {
        if err.unique_violation() {
            debug!(invoice = invoice.id, "invoice already recorded");
            return Ok(());
        }
        return Err(err.into());
    }

    if status == PaymentStatus::Failed {
        let mut active_model = subscription.into_active_model();
        active_model.status = Set(Status::PastDue);
        active_model.update(db).await?;
    }

    info!(invoice = invoice.id, status = ?status, "recorded payment");

    Ok(())
}
