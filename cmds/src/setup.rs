use anyhow::Context;
use dotenvy::dotenv;
use entity::{
    ncaa_colleges, njcaa_colleges,
    subscription_plans::{self, BillingInterval},
};
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, Database, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, Set,
};
use serde::Deserialize;
use std::{env, fs};
use uuid::Uuid;

#[derive(Debug, Default, Deserialize)]
struct Colleges {
    #[serde(default)]
    njcaa: Vec<NjcaaCollege>,
    #[serde(default)]
    ncaa: Vec<NcaaCollege>,
}

#[derive(Debug, Deserialize)]
struct NjcaaCollege {
    name: String,
    state: String,
    region: i16,
    division: njcaa_colleges::Division,
}

#[derive(Debug, Deserialize)]
struct NcaaCollege {
    name: String,
    state: String,
    division: ncaa_colleges::Division,
    conference: Option<String>,
}

async fn seed_colleges<C: ConnectionTrait>(db: &C, path: &str) -> anyhow::Result<()> {
    let file = fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
    let colleges: Colleges = serde_json::from_str(&file)?;

    let mut created = 0;

    for college in colleges.njcaa {
        let state = college.state.to_uppercase();
        let exists = njcaa_colleges::Entity::find()
            .filter(njcaa_colleges::Column::Name.eq(&college.name))
            .filter(njcaa_colleges::Column::State.eq(&state))
            .count(db)
            .await?;

        if exists > 0 {
            continue;
        }

        njcaa_colleges::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(college.name),
            state: Set(state),
            region: Set(college.region),
            division: Set(college.division),
            ..Default::default()
        }
        .insert(db)
        .await?;

        created += 1;
    }

    for college in colleges.ncaa {
        let state = college.state.to_uppercase();
        let exists = ncaa_colleges::Entity::find()
            .filter(ncaa_colleges::Column::Name.eq(&college.name))
            .filter(ncaa_colleges::Column::State.eq(&state))
            .count(db)
            .await?;

        if exists > 0 {
            continue;
        }

        ncaa_colleges::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(college.name),
            state: Set(state),
            division: Set(college.division),
            conference: Set(college.conference),
            ..Default::default()
        }
        .insert(db)
        .await?;

        created += 1;
    }

    println!("Seeded {created} colleges");

    Ok(())
}

async fn set_price_id<C: ConnectionTrait>(
    db: &C,
    interval: BillingInterval,
    price_id: String,
) -> anyhow::Result<()> {
    let plans = subscription_plans::Entity::find()
        .filter(subscription_plans::Column::BillingInterval.eq(interval))
        .all(db)
        .await?;

    for plan in plans {
        let name = plan.name.clone();
        let mut active_model = plan.into_active_model();
        active_model.provider_price_id = Set(Some(price_id.clone()));
        active_model.update(db).await?;

        println!("Set price id of {name}");
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let database_url = env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
    let database = Database::connect(&database_url).await?;

    Migrator::up(&database, None).await?;
    println!("Migrations applied");

    match env::var("COLLEGES_FILE") {
        Ok(path) => seed_colleges(&database, &path).await?,
        Err(_) => println!("COLLEGES_FILE is not set, skipping colleges"),
    }

    if let Ok(price_id) = env::var("STRIPE_PRICE_MONTHLY") {
        set_price_id(&database, BillingInterval::Month, price_id).await?;
    }

    if let Ok(price_id) = env::var("STRIPE_PRICE_YEARLY") {
        set_price_id(&database, BillingInterval::Year, price_id).await?;
    }

    Ok(())
}
