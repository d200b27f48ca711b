use super::utils::{self, drop_table};
use const_format::formatcp;
use entity::{
    njcaa_coach_profiles,
    player_evaluations::{self, constraints::*, RATING_RANGE},
    player_profiles,
};
use sea_orm_migration::prelude::*;

// sea-query cannot express partial indexes yet
const CREATE_CURRENT_INDEX: &str = formatcp!(
    r#"CREATE UNIQUE INDEX IF NOT EXISTS "{}" ON "player_evaluations" ("player_profile_id") WHERE "is_current""#,
    UC_PLAYER_EVALUATIONS_CURRENT
);

#[derive(DeriveMigrationName)]
pub struct Migration;

fn rating(column: player_evaluations::Column) -> ColumnDef {
    ColumnDef::new(column).small_integer().not_null().to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        use player_evaluations::Column;

        let ratings = [
            Column::Technical,
            Column::Tactical,
            Column::Physical,
            Column::Mental,
            Column::OverallRating,
            Column::Potential,
        ];

        let mut table = Table::create();

        table
            .table(player_evaluations::Entity)
            .if_not_exists()
            .col(&mut utils::uuid(Column::Id))
            .col(&mut utils::uuid(Column::PlayerProfileId))
            .col(&mut utils::uuid(Column::EvaluatorId))
            .col(ColumnDef::new(Column::Version).integer().not_null());

        for column in ratings {
            table.col(&mut rating(column));
        }

        let in_range =
            |column: Column| Expr::col(column).between(*RATING_RANGE.start(), *RATING_RANGE.end());

        let ratings_in_range = ratings[1..]
            .iter()
            .fold(in_range(ratings[0]), |check, column| {
                check.and(in_range(*column))
            });

        table
            .col(ColumnDef::new(Column::Strengths).text().null())
            .col(ColumnDef::new(Column::Weaknesses).text().null())
            .col(ColumnDef::new(Column::Notes).text().null())
            .col(
                ColumnDef::new(Column::IsCurrent)
                    .boolean()
                    .not_null()
                    .default(false),
            )
            .col(&mut utils::timestamp(Column::CreatedAt))
            .col(&mut utils::timestamp(Column::UpdatedAt))
            .check(ratings_in_range)
            .primary_key(
                Index::create()
                    .name(PK_PLAYER_EVALUATIONS)
                    .col(Column::Id),
            )
            .index(
                Index::create()
                    .name(UC_PLAYER_EVALUATIONS_VERSION)
                    .col(Column::PlayerProfileId)
                    .col(Column::Version)
                    .unique(),
            )
            .foreign_key(
                ForeignKey::create()
                    .name(FK_PLAYER_EVALUATIONS_PLAYER)
                    .from(player_evaluations::Entity, Column::PlayerProfileId)
                    .to(player_profiles::Entity, player_profiles::Column::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .foreign_key(
                ForeignKey::create()
                    .name(FK_PLAYER_EVALUATIONS_EVALUATOR)
                    .from(player_evaluations::Entity, Column::EvaluatorId)
                    .to(njcaa_coach_profiles::Entity, njcaa_coach_profiles::Column::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            );

        manager.create_table(table).await?;

        manager
            .get_connection()
            .execute_unprepared(CREATE_CURRENT_INDEX)
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_table!(manager, player_evaluations::Entity)
    }
}
