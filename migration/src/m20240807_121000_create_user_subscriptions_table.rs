use super::utils::{self, drop_table};
use entity::{
    subscription_plans,
    user_subscriptions::{self, constraints::*},
    users,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        use user_subscriptions::Column;

        manager
            .create_table(
                Table::create()
                    .table(user_subscriptions::Entity)
                    .if_not_exists()
                    .col(&mut utils::uuid(Column::Id))
                    .col(&mut utils::uuid(Column::UserId))
                    .col(&mut utils::uuid(Column::PlanId))
                    .col(&mut utils::string(Column::Status, 16))
                    .col(&mut utils::string(Column::ProviderCustomerId, 255))
                    .col(
                        ColumnDef::new(Column::ProviderSubscriptionId)
                            .string_len(255)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Column::CurrentPeriodEnd)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Column::CancelAtPeriodEnd)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(&mut utils::timestamp(Column::CreatedAt))
                    .col(&mut utils::timestamp(Column::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .name(PK_USER_SUBSCRIPTIONS)
                            .col(Column::Id),
                    )
                    .index(
                        Index::create()
                            .name(UC_USER_SUBSCRIPTIONS_USER_ID)
                            .col(Column::UserId)
                            .unique(),
                    )
                    .index(
                        Index::create()
                            .name(UC_USER_SUBSCRIPTIONS_PROVIDER_ID)
                            .col(Column::ProviderSubscriptionId)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_SUBSCRIPTIONS_USER_ID)
                            .from(user_subscriptions::Entity, Column::UserId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_SUBSCRIPTIONS_PLAN_ID)
                            .from(user_subscriptions::Entity, Column::PlanId)
                            .to(subscription_plans::Entity, subscription_plans::Column::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_table!(manager, user_subscriptions::Entity)
    }
}
