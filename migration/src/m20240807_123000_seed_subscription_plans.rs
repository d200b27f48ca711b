use entity::subscription_plans::{self, BillingInterval};
use sea_orm_migration::{
    prelude::*,
    sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set},
};
use uuid::Uuid;

#[derive(DeriveMigrationName)]
pub struct Migration;

const PLANS: [(&str, BillingInterval); 2] = [
    ("Monthly", BillingInterval::Month),
    ("Yearly", BillingInterval::Year),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for (name, interval) in PLANS {
            let exists = subscription_plans::Entity::find()
                .filter(subscription_plans::Column::Name.eq(name))
                .one(db)
                .await?
                .is_some();

            if exists {
                continue;
            }

            subscription_plans::ActiveModel {
                id: Set(Uuid::new_v4()),
                name: Set(name.to_owned()),
                price_in_cents: Set(interval.price_in_cents()),
                billing_interval: Set(interval),
                provider_price_id: Set(None),
                is_active: Set(true),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let names = PLANS.map(|(name, _)| name);

        subscription_plans::Entity::delete_many()
            .filter(subscription_plans::Column::Name.is_in(names))
            .exec(manager.get_connection())
            .await?;

        Ok(())
    }
}
