use crate::{
    billing::{BillingTrait, Stripe},
    Config, Jwt,
};
use anyhow::Context;
use rand::{
    rngs::{adapter::ReseedingRng, OsRng},
    Rng, SeedableRng,
};
use rand_chacha::ChaCha20Core;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, TransactionTrait};
use std::sync::Arc;
use tracing::log::LevelFilter;

pub trait StateTrait: Send + Sync + Clone + 'static {
    type Db: ConnectionTrait + TransactionTrait + Clone;
    type Rand: Rng;

    fn db(&self) -> &Self::Db;
    fn config(&self) -> &Config;
    fn jwt(&self) -> &Jwt;
    fn billing(&self) -> &dyn BillingTrait;
    fn rng(&self) -> Self::Rand;
}

pub struct State {
    database: DbConn,
    config: Config,
    jwt: Jwt,
    billing: Arc<dyn BillingTrait>,
}

impl State {
    pub async fn new(config: Config) -> anyhow::Result<Arc<Self>> {
        let database = Self::connect_database(&config.database_url).await?;
        let billing = Arc::new(Stripe::new(&config));

        Ok(Self::with_database(config, database, billing))
    }

    pub fn with_database(
        config: Config,
        database: DbConn,
        billing: Arc<dyn BillingTrait>,
    ) -> Arc<Self> {
        Arc::new(Self {
            jwt: Jwt::new(&config.jwt_secret, config.jwt_ttl),
            database,
            config,
            billing,
        })
    }

    async fn connect_database(url: &str) -> anyhow::Result<DbConn> {
        info!("Trying to connect to database");

        let mut opts = ConnectOptions::new(url);
        opts.sqlx_logging_level(LevelFilter::Debug);

        let db = Database::connect(opts)
            .await
            .context("failed to connect to database")?;

        info!("Connected to database");

        Ok(db)
    }
}

thread_local! {
    static CHACHA_THREAD_RNG: ReseedingRng<ChaCha20Core, OsRng> = {
        let rng = ChaCha20Core::from_entropy();
        ReseedingRng::new(rng, 1024*64, OsRng)
    }
}

impl StateTrait for Arc<State> {
    type Db = DbConn;
    type Rand = ReseedingRng<ChaCha20Core, OsRng>;

    fn db(&self) -> &Self::Db {
        &self.database
    }

    fn config(&self) -> &Config {
        &self.config
    }

    fn jwt(&self) -> &Jwt {
        &self.jwt
    }

    fn billing(&self) -> &dyn BillingTrait {
        self.billing.as_ref()
    }

    fn rng(&self) -> Self::Rand {
        CHACHA_THREAD_RNG.with(|x| x.clone())
    }
}
