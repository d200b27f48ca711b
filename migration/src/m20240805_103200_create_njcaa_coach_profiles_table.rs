use super::utils::{self, drop_table};
use entity::{
    njcaa_coach_profiles::{self, constraints::*},
    njcaa_colleges, users,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(njcaa_coach_profiles::Entity)
                    .if_not_exists()
                    .col(&mut utils::uuid(njcaa_coach_profiles::Column::Id))
                    .col(&mut utils::uuid(njcaa_coach_profiles::Column::UserId))
                    .col(&mut utils::string(njcaa_coach_profiles::Column::FirstName, 64))
                    .col(&mut utils::string(njcaa_coach_profiles::Column::LastName, 64))
                    .col(
                        ColumnDef::new(njcaa_coach_profiles::Column::Title)
                            .string_len(64)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(njcaa_coach_profiles::Column::Phone)
                            .string_len(32)
                            .null(),
                    )
                    .col(&mut utils::uuid(njcaa_coach_profiles::Column::CollegeId))
                    .col(&mut utils::timestamp(njcaa_coach_profiles::Column::CreatedAt))
                    .col(&mut utils::timestamp(njcaa_coach_profiles::Column::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .name(PK_NJCAA_COACH_PROFILES)
                            .col(njcaa_coach_profiles::Column::Id),
                    )
                    .index(
                        Index::create()
                            .name(UC_NJCAA_COACH_PROFILES_USER_ID)
                            .col(njcaa_coach_profiles::Column::UserId)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_NJCAA_COACH_PROFILES_USER_ID)
                            .from(njcaa_coach_profiles::Entity, njcaa_coach_profiles::Column::UserId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_NJCAA_COACH_PROFILES_COLLEGE_ID)
                            .from(njcaa_coach_profiles::Entity, njcaa_coach_profiles::Column::CollegeId)
                            .to(njcaa_colleges::Entity, njcaa_colleges::Column::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_table!(manager, njcaa_coach_profiles::Entity)
    }
}
