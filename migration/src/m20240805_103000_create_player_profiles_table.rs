use super::utils::{self, drop_table};
use entity::{
    njcaa_colleges,
    player_profiles::{self, constraints::*},
    users,
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
                    .table(player_profiles::Entity)
                    .if_not_exists()
                    .col(&mut utils::uuid(player_profiles::Column::Id))
                    .col(&mut utils::uuid(player_profiles::Column::UserId))
                    .col(&mut utils::string(player_profiles::Column::FirstName, 64))
                    .col(&mut utils::string(player_profiles::Column::LastName, 64))
                    .col(&mut utils::string(player_profiles::Column::Position, 16))
                    .col(
                        ColumnDef::new(player_profiles::Column::GraduationYear)
                            .small_integer()
                            .not_null(),
                    )
                    .col(&mut utils::uuid(player_profiles::Column::CollegeId))
                    .col(
                        ColumnDef::new(player_profiles::Column::HeightCm)
                            .small_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(player_profiles::Column::WeightKg)
                            .small_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(player_profiles::Column::Gpa).double().null())
                    .col(
                        ColumnDef::new(player_profiles::Column::PreferredFoot)
                            .string_len(8)
                            .null(),
                    )
                    .col(ColumnDef::new(player_profiles::Column::Bio).text().null())
                    .col(
                        ColumnDef::new(player_profiles::Column::HighlightVideoUrl)
                            .string_len(512)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(player_profiles::Column::GamesPlayed)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(player_profiles::Column::Goals)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(player_profiles::Column::Assists)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(player_profiles::Column::IsVisible)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(&mut utils::timestamp(player_profiles::Column::CreatedAt))
                    .col(&mut utils::timestamp(player_profiles::Column::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .name(PK_PLAYER_PROFILES)
                            .col(player_profiles::Column::Id),
                    )
                    .index(
                        Index::create()
                            .name(UC_PLAYER_PROFILES_USER_ID)
                            .col(player_profiles::Column::UserId)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PLAYER_PROFILES_USER_ID)
                            .from(player_profiles::Entity, player_profiles::Column::UserId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PLAYER_PROFILES_COLLEGE_ID)
                            .from(player_profiles::Entity, player_profiles::Column::CollegeId)
                            .to(njcaa_colleges::Entity, njcaa_colleges::Column::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_table!(manager, player_profiles::Entity)
    }
}
