use super::utils::{self, drop_table};
use entity::ncaa_colleges::{self, constraints::*};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ncaa_colleges::Entity)
                    .if_not_exists()
                    .col(&mut utils::uuid(ncaa_colleges::Column::Id))
                    .col(&mut utils::string(ncaa_colleges::Column::Name, 255))
                    .col(&mut utils::string(ncaa_colleges::Column::State, 2))
                    .col(&mut utils::string(ncaa_colleges::Column::Division, 8))
                    .col(
                        ColumnDef::new(ncaa_colleges::Column::Conference)
                            .string_len(255)
                            .null(),
                    )
                    .col(&mut utils::timestamp(ncaa_colleges::Column::CreatedAt))
                    .primary_key(
                        Index::create()
                            .name(PK_NCAA_COLLEGES)
                            .col(ncaa_colleges::Column::Id),
                    )
                    .index(
                        Index::create()
                            .name(UC_NCAA_COLLEGES_NAME_STATE)
                            .col(ncaa_colleges::Column::Name)
                            .col(ncaa_colleges::Column::State)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_table!(manager, ncaa_colleges::Entity)
    }
}
