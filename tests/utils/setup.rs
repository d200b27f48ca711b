use super::{billing::FakeBilling, request::RequestBuilder, user::User};
use chrono::Duration;
use entity::{
    ncaa_colleges, njcaa_colleges,
    subscription_plans::{self, BillingInterval},
    user_subscriptions::{self, Status},
    users::{self, UserType},
};
use http::StatusCode;
use migration::{Migrator, MigratorTrait};
use portall_backend::{Config, State};
use reqwest::Client;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectOptions, Database, DbConn, EntityTrait, QueryFilter, Set,
};
use serde_json::{json, Value};
use std::{
    net::SocketAddr,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};
use tokio::net::TcpListener;
use uuid::Uuid;

pub const PASSWORD: &str = "password123";
pub const WEBHOOK_SECRET: &str = "whsec_test";

fn config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_owned(),
        port: 0,
        frontend_url: "http://localhost:3000".to_owned(),
        jwt_secret: "test-secret".to_owned(),
        jwt_ttl: Duration::hours(1),
        stripe_api_url: "http://127.0.0.1:9".to_owned(),
        stripe_secret_key: "sk_test".to_owned(),
        stripe_webhook_secret: WEBHOOK_SECRET.to_owned(),
    }
}

async fn setup_database() -> DbConn {
    // every pooled connection to `:memory:` would be a separate database
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.min_connections(1).max_connections(1).sqlx_logging(false);

    let db = Database::connect(opts).await.expect("failed to open database");

    Migrator::up(&db, None)
        .await
        .expect("failed to apply migrations");

    db
}

async fn setup_backend(db: DbConn, billing: Arc<FakeBilling>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let state = State::with_database(config(), db, billing);

    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        portall_backend::run(listener, state).await.unwrap();
    });

    addr
}

#[derive(Clone)]
pub struct App {
    pub addr: SocketAddr,
    pub client: Client,
    pub db: DbConn,
    pub billing: Arc<FakeBilling>,
    counter: Arc<AtomicU64>,
}

#[allow(unused)]
impl App {
    pub async fn new() -> App {
        let db = setup_database().await;
        let billing = Arc::new(FakeBilling::default());

        let addr = setup_backend(db.clone(), billing.clone()).await;

        App {
            addr,
            client: Client::new(),
            db,
            billing,
            counter: Arc::new(AtomicU64::new(0)),
        }
    }

    fn get_url(&self, url: &str) -> String {
        format!("http://{}{}", self.addr, url)
    }

    fn next(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::Relaxed)
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.get(self.get_url(url)))
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.post(self.get_url(url)))
    }

    pub fn patch(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.patch(self.get_url(url)))
    }

    pub fn put(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.put(self.get_url(url)))
    }

    pub fn delete(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.delete(self.get_url(url)))
    }
}

#[allow(unused)]
impl App {
    pub async fn njcaa_college(&self) -> Uuid {
        let number = self.next();

        njcaa_colleges::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(format!("Test Community College {number}")),
            state: Set("TX".to_owned()),
            region: Set(5),
            division: Set(njcaa_colleges::Division::D1),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .unwrap()
        .id
    }

    pub async fn ncaa_college(&self) -> Uuid {
        let number = self.next();

        ncaa_colleges::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(format!("Test University {number}")),
            state: Set("CA".to_owned()),
            division: Set(ncaa_colleges::Division::NcaaD1),
            conference: Set(None),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .unwrap()
        .id
    }

    pub async fn register(&self, role: UserType, college_id: Uuid) -> User {
        let email = format!("user{}@test.portall", self.next());

        let mut body = json!({
            "email": email,
            "password": PASSWORD,
            "user_type": role,
            "first_name": "Test",
            "last_name": format!("User {}", self.next()),
            "college_id": college_id,
        });

        if role == UserType::Player {
            body["position"] = json!("midfielder");
            body["graduation_year"] = json!(2026);
        }

        let res = self.post("/v1/auth/register").json(&body).send().await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let res: Value = res.json().await;

        User {
            id: res["id"].as_str().unwrap().parse().unwrap(),
            email,
            password: PASSWORD.to_owned(),
            role,
            token: res["token"].as_str().unwrap().to_owned(),
        }
    }

    pub async fn player(&self, college_id: Uuid) -> User {
        self.register(UserType::Player, college_id).await
    }

    pub async fn njcaa_coach(&self, college_id: Uuid) -> User {
        self.register(UserType::NjcaaCoach, college_id).await
    }

    pub async fn coach(&self) -> User {
        let college = self.ncaa_college().await;
        self.register(UserType::Coach, college).await
    }

    /// A coach holding an active monthly subscription.
    pub async fn subscribed_coach(&self) -> User {
        let coach = self.coach().await;
        self.subscribe(&coach).await;
        coach
    }

    pub async fn admin(&self) -> User {
        let email = format!("admin{}@test.portall", self.next());
        let password_hash = portall_backend::hash_password(PASSWORD.to_owned())
            .await
            .unwrap();

        users::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email.clone()),
            password_hash: Set(password_hash),
            user_type: Set(UserType::Admin),
            is_verified: Set(true),
            verification_token: Set(None),
            reset_token: Set(None),
            reset_token_expires_at: Set(None),
            last_login_at: Set(None),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .unwrap();

        self.login(&email, PASSWORD, UserType::Admin).await
    }

    pub async fn login(&self, email: &str, password: &str, role: UserType) -> User {
        let res = self
            .post("/v1/auth/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::OK);

        let res: Value = res.json().await;

        User {
            id: res["user"]["id"].as_str().unwrap().parse().unwrap(),
            email: email.to_owned(),
            password: password.to_owned(),
            role,
            token: res["token"].as_str().unwrap().to_owned(),
        }
    }

    pub async fn subscribe(&self, user: &User) {
        let plan = subscription_plans::Entity::find()
            .filter(subscription_plans::Column::BillingInterval.eq(BillingInterval::Month))
            .one(&self.db)
            .await
            .unwrap()
            .expect("plans are seeded by migrations");

        user_subscriptions::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user.id),
            plan_id: Set(plan.id),
            status: Set(Status::Active),
            provider_customer_id: Set(format!("cus_{}", user.id.simple())),
            provider_subscription_id: Set(Some(format!("sub_{}", user.id.simple()))),
            current_period_end: Set(Some(chrono::Utc::now() + Duration::days(30))),
            cancel_at_period_end: Set(false),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .unwrap();
    }

    pub async fn set_visible(&self, player: &User, is_visible: bool) {
        let res = self
            .put("/v1/profile/visibility")
            .user(player)
            .json(&json!({ "is_visible": is_visible }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);
    }

    /// Id of the caller's own profile row.
    pub async fn profile_id(&self, user: &User) -> Uuid {
        let res = self.get("/v1/profile").user(user).send().await;
        assert_eq!(res.status(), StatusCode::OK);

        let res: Value = res.json().await;
        res["id"].as_str().unwrap().parse().unwrap()
    }
}
