use super::utils::{self, drop_table};
use entity::subscription_plans::{self, constraints::*, BillingInterval};
use sea_orm_migration::{prelude::*, sea_orm::ActiveEnum};

#[derive(DeriveMigrationName)]
pub struct Migration;

fn pair(interval: BillingInterval) -> SimpleExpr {
    use subscription_plans::Column;

    Expr::col(Column::PriceInCents)
        .eq(interval.price_in_cents())
        .and(Expr::col(Column::BillingInterval).eq(interval.to_value()))
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        use subscription_plans::Column;

        manager
            .create_table(
                Table::create()
                    .table(subscription_plans::Entity)
                    .if_not_exists()
                    .col(&mut utils::uuid(Column::Id))
                    .col(&mut utils::string(Column::Name, 64))
                    .col(ColumnDef::new(Column::PriceInCents).integer().not_null())
                    .col(&mut utils::string(Column::BillingInterval, 8))
                    .col(
                        ColumnDef::new(Column::ProviderPriceId)
                            .string_len(255)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Column::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(&mut utils::timestamp(Column::CreatedAt))
                    .check(pair(BillingInterval::Month).or(pair(BillingInterval::Year)))
                    .primary_key(
                        Index::create()
                            .name(PK_SUBSCRIPTION_PLANS)
                            .col(Column::Id),
                    )
                    .index(
                        Index::create()
                            .name(UC_SUBSCRIPTION_PLANS_NAME)
                            .col(Column::Name)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_table!(manager, subscription_plans::Entity)
    }
}
