mod utils;

use chrono::Utc;
use entity::subscription_plans::{self, BillingInterval};
use portall_backend::billing::webhook;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};
use utils::{prelude::*, setup::WEBHOOK_SECRET};

async fn set_price_id(app: &App, interval: BillingInterval, price_id: &str) -> Uuid {
    let plan = subscription_plans::Entity::find()
        .filter(subscription_plans::Column::BillingInterval.eq(interval))
        .one(&app.db)
        .await
        .unwrap()
        .unwrap();

    subscription_plans::Entity::update(subscription_plans::ActiveModel {
        id: Set(plan.id),
        provider_price_id: Set(Some(price_id.to_owned())),
        ..Default::default()
    })
    .exec(&app.db)
    .await
    .unwrap();

    plan.id
}

async fn send_event(app: &App, event: Value) -> TestResponse {
    let payload = event.to_string();
    let signature = webhook::sign(payload.as_bytes(), WEBHOOK_SECRET, Utc::now().timestamp())
        .unwrap();

    app.post("/v1/webhooks/billing")
        .header("stripe-signature", signature)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(payload)
        .send()
        .await
}

async fn my_subscription(app: &App, user: &User) -> Value {
    let res = app.get("/v1/subscriptions/me").user(user).send().await;
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await
}

#[tokio::test]
async fn plans_are_public() {
    let app = App::new().await;

    let res = app.get("/v1/subscriptions/plans").send().await;
    assert_eq!(res.status(), StatusCode::OK);

    let plans: Vec<Value> = res.json().await;
    assert_eq!(plans.len(), 2);
    assert_json_include!(
        actual: plans[0].clone(),
        expected: json!({ "price_in_cents": 2999, "billing_interval": "month" })
    );
    assert_json_include!(
        actual: plans[1].clone(),
        expected: json!({ "price_in_cents": 7999, "billing_interval": "year" })
    );
    assert!(plans[0].get("provider_price_id").is_none());
}

#[tokio::test]
async fn no_subscription_is_null() {
    let app = App::new().await;
    let coach = app.coach().await;

    assert_eq!(my_subscription(&app, &coach).await, Value::Null);
}

#[tokio::test]
async fn plan_without_price_is_not_available() {
    let app = App::new().await;
    let coach = app.coach().await;

    let res = app.get("/v1/subscriptions/plans").send().await;
    let plans: Vec<Value> = res.json().await;

    let res = app
        .post("/v1/subscriptions/checkout")
        .user(&coach)
        .json(&json!({ "plan_id": plans[0]["id"] }))
        .send()
        .await;

    assert_error!(res, error::PLAN_NOT_AVAILABLE);
}

#[tokio::test]
async fn unknown_plan() {
    let app = App::new().await;
    let coach = app.coach().await;

    let res = app
        .post("/v1/subscriptions/checkout")
        .user(&coach)
        .json(&json!({ "plan_id": Uuid::new_v4() }))
        .send()
        .await;

    assert_error!(res, error::PLAN_NOT_FOUND);
}

#[tokio::test]
async fn players_cannot_subscribe() {
    let app = App::new().await;
    let college = app.njcaa_college().await;
    let player = app.player(college).await;

    let res = app
        .post("/v1/subscriptions/checkout")
        .user(&player)
        .json(&json!({ "plan_id": Uuid::new_v4() }))
        .send()
        .await;

    assert_error!(res, error::FORBIDDEN_ROLE);
}

#[tokio::test]
async fn already_subscribed() {
    let app = App::new().await;
    let plan_id = set_price_id(&app, BillingInterval::Year, "price_yearly").await;
    let coach = app.subscribed_coach().await;

    let res = app
        .post("/v1/subscriptions/checkout")
        .user(&coach)
        .json(&json!({ "plan_id": plan_id }))
        .send()
        .await;

    assert_error!(res, error::ALREADY_SUBSCRIBED);
}

#[tokio::test]
async fn checkout_and_webhooks() {
    let app = App::new().await;
    let plan_id = set_price_id(&app, BillingInterval::Month, "price_monthly").await;
    let coach = app.coach().await;

    let res = app
        .post("/v1/subscriptions/checkout")
        .user(&coach)
        .json(&json!({ "plan_id": plan_id }))
        .send()
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let checkout: Value = res.json().await;
    assert!(checkout["checkout_url"]
        .as_str()
        .unwrap()
        .starts_with("https://checkout.test/"));
    assert_eq!(*app.billing.customers.lock().unwrap(), [coach.email.clone()]);
    assert_eq!(*app.billing.sessions.lock().unwrap(), ["price_monthly"]);

    let subscription = my_subscription(&app, &coach).await;
    assert_json_include!(
        actual: subscription,
        expected: json!({ "status": "incomplete", "is_active": false, "plan": { "id": plan_id } })
    );

    let res = app.get("/v1/players").user(&coach).send().await;
    assert_error!(res, error::SUBSCRIPTION_REQUIRED);

    let res = send_event(
        &app,
        json!({
            "id": "evt_1",
            "type": "checkout.session.completed",
            "data": { "object": {
                "customer": "cus_ignored",
                "subscription": "sub_123",
                "client_reference_id": coach.id,
                "metadata": { "user_id": coach.id.to_string(), "plan_id": plan_id.to_string() },
            }},
        }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await;
    assert_json_eq!(body, json!({ "received": true }));

    let subscription = my_subscription(&app, &coach).await;
    assert_json_include!(
        actual: subscription,
        expected: json!({ "status": "active", "is_active": true })
    );

    let res = app.get("/v1/players").user(&coach).send().await;
    assert_eq!(res.status(), StatusCode::OK);

    let paid = json!({
        "id": "evt_2",
        "type": "invoice.paid",
        "data": { "object": {
            "id": "in_1",
            "customer": "cus_ignored",
            "subscription": "sub_123",
            "amount_paid": 2999,
            "amount_due": 2999,
            "currency": "USD",
            "status_transitions": { "paid_at": Utc::now().timestamp() },
        }},
    });

    assert_eq!(send_event(&app, paid.clone()).await.status(), StatusCode::OK);
    assert_eq!(send_event(&app, paid).await.status(), StatusCode::OK);

    let res = app.get("/v1/subscriptions/payments").user(&coach).send().await;
    let payments: Vec<Value> = res.json().await;
    assert_eq!(payments.len(), 1);
    assert_json_include!(
        actual: payments[0].clone(),
        expected: json!({
            "provider_invoice_id": "in_1",
            "amount_in_cents": 2999,
            "currency": "usd",
            "status": "succeeded",
        })
    );

    let res = send_event(
        &app,
        json!({
            "id": "evt_3",
            "type": "invoice.payment_failed",
            "data": { "object": {
                "id": "in_2",
                "subscription": "sub_123",
                "amount_due": 2999,
                "currency": "usd",
            }},
        }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);

    let subscription = my_subscription(&app, &coach).await;
    assert_eq!(subscription["status"], json!("past_due"));

    let res = app.get("/v1/subscriptions/payments").user(&coach).send().await;
    let payments: Vec<Value> = res.json().await;
    assert_eq!(payments.len(), 2);

    let res = send_event(
        &app,
        json!({
            "id": "evt_4",
            "type": "customer.subscription.deleted",
            "data": { "object": {
                "id": "sub_123",
                "customer": "cus_ignored",
                "status": "canceled",
                "current_period_end": Utc::now().timestamp(),
            }},
        }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);

    let subscription = my_subscription(&app, &coach).await;
    assert_eq!(subscription["status"], json!("canceled"));
}

#[tokio::test]
async fn subscription_updates() {
    let app = App::new().await;
    let coach = app.subscribed_coach().await;
    let period_end = Utc::now().timestamp() + 86_400;

    let res = send_event(
        &app,
        json!({
            "id": "evt_1",
            "type": "customer.subscription.updated",
            "data": { "object": {
                "id": format!("sub_{}", coach.id.simple()),
                "customer": format!("cus_{}", coach.id.simple()),
                "status": "trialing",
                "current_period_end": period_end,
                "cancel_at_period_end": true,
            }},
        }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);

    let subscription = my_subscription(&app, &coach).await;
    assert_json_include!(
        actual: subscription,
        expected: json!({ "status": "trialing", "cancel_at_period_end": true, "is_active": true })
    );
}

#[tokio::test]
async fn unknown_events_are_acknowledged() {
    let app = App::new().await;

    let res = send_event(
        &app,
        json!({ "id": "evt_1", "type": "customer.created", "data": { "object": {} } }),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn unsigned_webhook() {
    let app = App::new().await;

    let res = app
        .post("/v1/webhooks/billing")
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(r#"{"id":"evt_1","type":"invoice.paid","data":{"object":{}}}"#)
        .send()
        .await;

    assert_error!(res, error::INVALID_SIGNATURE);
}

#[tokio::test]
async fn forged_webhook() {
    let app = App::new().await;

    let payload = r#"{"id":"evt_1","type":"invoice.paid","data":{"object":{}}}"#;
    let signature = webhook::sign(payload.as_bytes(), "whsec_other", Utc::now().timestamp())
        .unwrap();

    let res = app
        .post("/v1/webhooks/billing")
        .header("stripe-signature", signature)
        .body(payload)
        .send()
        .await;

    assert_error!(res, error::INVALID_SIGNATURE);
}

#[tokio::test]
async fn cancel() {
    let app = App::new().await;
    let coach = app.subscribed_coach().await;

    let res = app
        .post("/v1/subscriptions/cancel")
        .user(&coach)
        .send()
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let subscription: Value = res.json().await;
    assert_eq!(subscription["cancel_at_period_end"], json!(true));
    assert_eq!(subscription["status"], json!("active"));
    assert_eq!(
        *app.billing.canceled.lock().unwrap(),
        [format!("sub_{}", coach.id.simple())]
    );
}

#[tokio::test]
async fn cancel_without_subscription() {
    let app = App::new().await;
    let coach = app.coach().await;

    let res = app
        .post("/v1/subscriptions/cancel")
        .user(&coach)
        .send()
        .await;

    assert_error!(res, error::SUBSCRIPTION_NOT_FOUND);
}

#[tokio::test]
async fn schema_rejects_mismatched_plan_price() {
    let app = App::new().await;

    let plan = |name: &str, price: i32, interval: BillingInterval| subscription_plans::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_owned()),
        price_in_cents: Set(price),
        billing_interval: Set(interval),
        provider_price_id: Set(None),
        is_active: Set(false),
        created_at: Set(Utc::now()),
    };

    // `Entity::insert` writes without running the entity hook
    let res = subscription_plans::Entity::insert(plan("Cheap yearly", 2999, BillingInterval::Year))
        .exec(&app.db)
        .await;
    assert!(res.is_err());

    let res = subscription_plans::Entity::insert(plan("Yearly again", 7999, BillingInterval::Year))
        .exec(&app.db)
        .await;
    assert!(res.is_ok());
}
