use super::utils::{self, drop_table};
use entity::users::{self, constraints::*};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(users::Entity)
                    .if_not_exists()
                    .col(&mut utils::uuid(users::Column::Id))
                    .col(&mut utils::string(users::Column::Email, 255))
                    .col(&mut utils::string(users::Column::PasswordHash, 255))
                    .col(&mut utils::string(users::Column::UserType, 16))
                    .col(
                        ColumnDef::new(users::Column::IsVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(users::Column::VerificationToken)
                            .string_len(64)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(users::Column::ResetToken)
                            .string_len(64)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(users::Column::ResetTokenExpiresAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(users::Column::LastLoginAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(&mut utils::timestamp(users::Column::CreatedAt))
                    .col(&mut utils::timestamp(users::Column::UpdatedAt))
                    .primary_key(Index::create().name(PK_USERS).col(users::Column::Id))
                    .index(
                        Index::create()
                            .name(UC_USERS_EMAIL)
                            .col(users::Column::Email)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_table!(manager, users::Entity)
    }
}
