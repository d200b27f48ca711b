use super::utils::{self, drop_table};
use entity::{
    payment_history::{self, constraints::*},
    user_subscriptions,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        use payment_history::Column;

        manager
            .create_table(
                Table::create()
                    .table(payment_history::Entity)
                    .if_not_exists()
                    .col(&mut utils::uuid(Column::Id))
                    .col(&mut utils::uuid(Column::SubscriptionId))
                    .col(&mut utils::string(Column::ProviderInvoiceId, 255))
                    .col(ColumnDef::new(Column::AmountInCents).integer().not_null())
                    .col(&mut utils::string(Column::Currency, 3))
                    .col(&mut utils::string(Column::Status, 16))
                    .col(
                        ColumnDef::new(Column::PaidAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(&mut utils::timestamp(Column::CreatedAt))
                    .primary_key(Index::create().name(PK_PAYMENT_HISTORY).col(Column::Id))
                    .index(
                        Index::create()
                            .name(UC_PAYMENT_HISTORY_INVOICE)
                            .col(Column::ProviderInvoiceId)
                            .col(Column::Status)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PAYMENT_HISTORY_SUBSCRIPTION)
                            .from(payment_history::Entity, Column::SubscriptionId)
                            .to(user_subscriptions::Entity, user_subscriptions::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_table!(manager, payment_history::Entity)
    }
}
