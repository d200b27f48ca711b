use super::user_subscriptions;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

pub mod constraints {
    pub const PK_PAYMENT_HISTORY: &str = "PK_payment_history";
    pub const UC_PAYMENT_HISTORY_INVOICE: &str = "UC_payment_history_invoice_status";
    pub const FK_PAYMENT_HISTORY_SUBSCRIPTION: &str = "FK_payment_history_subscription";
}

/// Append-only ledger of invoices reported by the billing provider.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "payment_history")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub subscription_id: Uuid,
    pub provider_invoice_id: String,
    pub amount_in_cents: i32,
    pub currency: String,
    pub status: PaymentStatus,
    pub paid_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(
    EnumIter, DeriveActiveEnum, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[sea_orm(string_value = "succeeded")]
    Succeeded,
    #[sea_orm(string_value = "failed")]
    Failed,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Subscription,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Subscription => Entity::belongs_to(user_subscriptions::Entity)
                .from(Column::SubscriptionId)
                .to(user_subscriptions::Column::Id)
                .into(),
        }
    }
}

impl Related<user_subscriptions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subscription.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if !insert {
            return Err(DbErr::Custom("payment history is append-only".to_owned()));
        }

        if self.created_at.is_not_set() {
            self.created_at = Set(Utc::now());
        }

        Ok(self)
    }
}

impl Entity {
    #[inline]
    pub fn find_by_subscription(subscription_id: Uuid) -> Select<Entity> {
        Self::find().filter(Column::SubscriptionId.eq(subscription_id))
    }

    /// An invoice is recorded at most once per outcome.
    #[inline]
    pub fn find_by_invoice(invoice_id: &str, status: PaymentStatus) -> Select<Entity> {
        Self::find()
            .filter(Column::ProviderInvoiceId.eq(invoice_id))
            .filter(Column::Status.eq(status))
    }
}
