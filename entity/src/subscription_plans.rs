use super::user_subscriptions;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{entity::prelude::*, ActiveValue, Set};
use serde::{Deserialize, Serialize};

pub mod constraints {
    pub const PK_SUBSCRIPTION_PLANS: &str = "PK_subscription_plans";
    pub const UC_SUBSCRIPTION_PLANS_NAME: &str = "UC_subscription_plans_name";
}

pub const MONTHLY_PRICE_IN_CENTS: i32 = 2999;
pub const YEARLY_PRICE_IN_CENTS: i32 = 7999;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "subscription_plans")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub price_in_cents: i32,
    pub billing_interval: BillingInterval,
    #[serde(skip_serializing)]
    pub provider_price_id: Option<String>,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(
    EnumIter, DeriveActiveEnum, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(8))")]
#[serde(rename_all = "snake_case")]
pub enum BillingInterval {
    #[sea_orm(string_value = "month")]
    Month,
    #[sea_orm(string_value = "year")]
    Year,
}

impl BillingInterval {
    /// The only price a plan with this interval may carry.
    pub const fn price_in_cents(&self) -> i32 {
        match self {
            Self::Month => MONTHLY_PRICE_IN_CENTS,
            Self::Year => YEARLY_PRICE_IN_CENTS,
        }
    }

    pub const fn accepts(&self, price_in_cents: i32) -> bool {
        self.price_in_cents() == price_in_cents
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Subscriptions,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Subscriptions => Entity::has_many(user_subscriptions::Entity).into(),
        }
    }
}

impl Related<user_subscriptions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subscriptions.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let price = match &self.price_in_cents {
            ActiveValue::Set(price) | ActiveValue::Unchanged(price) => Some(*price),
            ActiveValue::NotSet => None,
        };

        let interval = match &self.billing_interval {
            ActiveValue::Set(interval) | ActiveValue::Unchanged(interval) => Some(*interval),
            ActiveValue::NotSet => None,
        };

        // a partial update needs the stored half of the pair
        let (price, interval) = match (price, interval, &self.id) {
            (Some(price), Some(interval), _) => (price, interval),
            (price, interval, ActiveValue::Set(id) | ActiveValue::Unchanged(id))
                if price.is_some() || interval.is_some() =>
            {
                let stored = Entity::find_by_id(*id)
                    .one(db)
                    .await?
                    .ok_or_else(|| DbErr::RecordNotFound("subscription plan".to_owned()))?;

                (
                    price.unwrap_or(stored.price_in_cents),
                    interval.unwrap_or(stored.billing_interval),
                )
            }
            (None, None, _) if !insert => return Ok(self),
            _ => {
                return Err(DbErr::Custom(
                    "subscription plan needs a price and an interval".to_owned(),
                ))
            }
        };

        if !interval.accepts(price) {
            return Err(DbErr::Custom(format!(
                "{price} cents is not the price of a {interval:?} plan"
            )));
        }

        if insert && self.created_at.is_not_set() {
            self.created_at = Set(Utc::now());
        }

        Ok(self)
    }
}

impl Entity {
    #[inline]
    pub fn find_active() -> Select<Entity> {
        Self::find().filter(Column::IsActive.eq(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ActiveModelTrait, DatabaseBackend, MockDatabase};

    fn plan(price: i32, interval: BillingInterval) -> Model {
        Model {
            id: Uuid::new_v4(),
            name: "Plan".to_owned(),
            price_in_cents: price,
            billing_interval: interval,
            provider_price_id: None,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn active(model: &Model) -> ActiveModel {
        ActiveModel {
            id: Set(model.id),
            name: Set(model.name.clone()),
            price_in_cents: Set(model.price_in_cents),
            billing_interval: Set(model.billing_interval),
            provider_price_id: Set(None),
            is_active: Set(true),
            ..Default::default()
        }
    }

    #[test]
    fn intervals_have_fixed_prices() {
        assert!(BillingInterval::Month.accepts(2999));
        assert!(BillingInterval::Year.accepts(7999));
        assert!(!BillingInterval::Month.accepts(7999));
        assert!(!BillingInterval::Year.accepts(2999));
        assert!(!BillingInterval::Month.accepts(1999));
    }

    #[tokio::test]
    async fn matching_pair_is_saved() {
        let model = plan(7999, BillingInterval::Year);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[model.clone()]])
            .into_connection();

        let saved = active(&model).insert(&db).await.unwrap();

        assert_eq!(saved.price_in_cents, 7999);
    }

    #[tokio::test]
    async fn mismatched_pair_is_rejected() {
        let model = plan(2999, BillingInterval::Year);

        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let result = active(&model).insert(&db).await;

        assert!(matches!(result, Err(DbErr::Custom(_))));
        assert!(db.into_transaction_log().is_empty());
    }
}
