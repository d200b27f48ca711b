use super::utils::{self, drop_table};
use entity::njcaa_colleges::{self, constraints::*};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(njcaa_colleges::Entity)
                    .if_not_exists()
                    .col(&mut utils::uuid(njcaa_colleges::Column::Id))
                    .col(&mut utils::string(njcaa_colleges::Column::Name, 255))
                    .col(&mut utils::string(njcaa_colleges::Column::State, 2))
                    .col(
                        ColumnDef::new(njcaa_colleges::Column::Region)
                            .small_integer()
                            .not_null(),
                    )
                    .col(&mut utils::string(njcaa_colleges::Column::Division, 2))
                    .col(&mut utils::timestamp(njcaa_colleges::Column::CreatedAt))
                    .primary_key(
                        Index::create()
                            .name(PK_NJCAA_COLLEGES)
                            .col(njcaa_colleges::Column::Id),
                    )
                    .index(
                        Index::create()
                            .name(UC_NJCAA_COLLEGES_NAME_STATE)
                            .col(njcaa_colleges::Column::Name)
                            .col(njcaa_colleges::Column::State)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_table!(manager, njcaa_colleges::Entity)
    }
}
