use super::utils::{self, drop_table};
use entity::{
    coach_favorites::{self, constraints::*},
    coach_profiles, player_profiles,
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
                    .table(coach_favorites::Entity)
                    .if_not_exists()
                    .col(&mut utils::uuid(coach_favorites::Column::Id))
                    .col(&mut utils::uuid(coach_favorites::Column::CoachProfileId))
                    .col(&mut utils::uuid(coach_favorites::Column::PlayerProfileId))
                    .col(&mut utils::string(coach_favorites::Column::Priority, 8))
                    .col(&mut utils::string(coach_favorites::Column::Status, 16))
                    .col(ColumnDef::new(coach_favorites::Column::Notes).text().null())
                    .col(&mut utils::timestamp(coach_favorites::Column::CreatedAt))
                    .col(&mut utils::timestamp(coach_favorites::Column::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .name(PK_COACH_FAVORITES)
                            .col(coach_favorites::Column::Id),
                    )
                    .index(
                        Index::create()
                            .name(UC_COACH_FAVORITES_PAIR)
                            .col(coach_favorites::Column::CoachProfileId)
                            .col(coach_favorites::Column::PlayerProfileId)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COACH_FAVORITES_COACH)
                            .from(coach_favorites::Entity, coach_favorites::Column::CoachProfileId)
                            .to(coach_profiles::Entity, coach_profiles::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COACH_FAVORITES_PLAYER)
                            .from(
                                coach_favorites::Entity,
                                coach_favorites::Column::PlayerProfileId,
                            )
                            .to(player_profiles::Entity, player_profiles::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_table!(manager, coach_favorites::Entity)
    }
}
