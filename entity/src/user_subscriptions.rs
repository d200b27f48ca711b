use super::{payment_history, subscription_plans, users};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub mod constraints {
    pub const PK_USER_SUBSCRIPTIONS: &str = "PK_user_subscriptions";
    pub const UC_USER_SUBSCRIPTIONS_USER_ID: &str = "UC_user_subscriptions_user_id";
    pub const UC_USER_SUBSCRIPTIONS_PROVIDER_ID: &str = "UC_user_subscriptions_provider_id";
    pub const FK_USER_SUBSCRIPTIONS_USER_ID: &str = "FK_user_subscriptions_user_id";
    pub const FK_USER_SUBSCRIPTIONS_PLAN_ID: &str = "FK_user_subscriptions_plan_id";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "user_subscriptions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub plan_id: Uuid,
    pub status: Status,
    #[serde(skip_serializing)]
    pub provider_customer_id: String,
    #[serde(skip_serializing)]
    #[sea_orm(unique)]
    pub provider_subscription_id: Option<String>,
    pub current_period_end: Option<DateTimeUtc>,
    pub cancel_at_period_end: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

/// Mirrors the lifecycle states the billing provider reports.
#[derive(
    EnumIter, DeriveActiveEnum, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[sea_orm(string_value = "incomplete")]
    Incomplete,
    #[sea_orm(string_value = "trialing")]
    Trialing,
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "past_due")]
    PastDue,
    #[sea_orm(string_value = "canceled")]
    Canceled,
    #[sea_orm(string_value = "unpaid")]
    Unpaid,
}

impl Status {
    pub fn from_provider(status: &str) -> Option<Self> {
        Some(match status {
            "incomplete" | "incomplete_expired" => Self::Incomplete,
            "trialing" => Self::Trialing,
            "active" => Self::Active,
            "past_due" => Self::PastDue,
            "canceled" => Self::Canceled,
            "unpaid" => Self::Unpaid,
            _ => return None,
        })
    }
}

impl Model {
    /// Whether the subscription grants access at `now`.
    pub fn grants_access(&self, now: DateTime<Utc>) -> bool {
        let status_ok = matches!(self.status, Status::Active | Status::Trialing);
        let period_ok = self.current_period_end.map_or(true, |end| end > now);

        status_ok && period_ok
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    Plan,
    Payments,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::User => Entity::belongs_to(users::Entity)
                .from(Column::UserId)
                .to(users::Column::Id)
                .into(),
            Self::Plan => Entity::belongs_to(subscription_plans::Entity)
                .from(Column::PlanId)
                .to(subscription_plans::Column::Id)
                .into(),
            Self::Payments => Entity::has_many(payment_history::Entity).into(),
        }
    }
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<subscription_plans::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plan.def()
    }
}

impl Related<payment_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        crate::touch(&mut self.created_at, &mut self.updated_at, insert);
        Ok(self)
    }
}

impl Entity {
    #[inline]
    pub fn find_by_user(user_id: Uuid) -> Select<Entity> {
        Self::find().filter(Column::UserId.eq(user_id))
    }

    #[inline]
    pub fn find_by_provider_subscription(subscription_id: &str) -> Select<Entity> {
        Self::find().filter(Column::ProviderSubscriptionId.eq(subscription_id))
    }

    #[inline]
    pub fn find_by_provider_customer(customer_id: &str) -> Select<Entity> {
        Self::find().filter(Column::ProviderCustomerId.eq(customer_id))
    }
}
