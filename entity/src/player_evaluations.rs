use super::{njcaa_coach_profiles, player_profiles};
use async_trait::async_trait;
use sea_orm::{entity::prelude::*, sea_query::Expr, ActiveValue};
use serde::Serialize;
use std::ops::RangeInclusive;

pub mod constraints {
    pub const PK_PLAYER_EVALUATIONS: &str = "PK_player_evaluations";
    pub const UC_PLAYER_EVALUATIONS_VERSION: &str = "UC_player_evaluations_version";
    pub const UC_PLAYER_EVALUATIONS_CURRENT: &str = "UC_player_evaluations_current";
    pub const FK_PLAYER_EVALUATIONS_PLAYER: &str = "FK_player_evaluations_player";
    pub const FK_PLAYER_EVALUATIONS_EVALUATOR: &str = "FK_player_evaluations_evaluator";
}

pub const RATING_RANGE: RangeInclusive<i16> = 1..=10;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "player_evaluations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub player_profile_id: Uuid,
    pub evaluator_id: Uuid,
    pub version: i32,
    pub technical: i16,
    pub tactical: i16,
    pub physical: i16,
    pub mental: i16,
    pub overall_rating: i16,
    pub potential: i16,
    pub strengths: Option<String>,
    pub weaknesses: Option<String>,
    pub notes: Option<String>,
    pub is_current: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Player,
    Evaluator,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Player => Entity::belongs_to(player_profiles::Entity)
                .from(Column::PlayerProfileId)
                .to(player_profiles::Column::Id)
                .into(),
            Self::Evaluator => Entity::belongs_to(njcaa_coach_profiles::Entity)
                .from(Column::EvaluatorId)
                .to(njcaa_coach_profiles::Column::Id)
                .into(),
        }
    }
}

impl Related<player_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl Related<njcaa_coach_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evaluator.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Keeps at most one current evaluation per player: saving a row flagged
    /// as current demotes every other current row of the same player. Run it
    /// inside the same transaction as the write.
    async fn before_save<C>(mut self, db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let ratings = [
            &self.technical,
            &self.tactical,
            &self.physical,
            &self.mental,
            &self.overall_rating,
            &self.potential,
        ];

        for rating in ratings {
            if let ActiveValue::Set(value) = rating {
                if !RATING_RANGE.contains(value) {
                    return Err(DbErr::Custom(format!("rating out of range: {value}")));
                }
            }
        }

        crate::touch(&mut self.created_at, &mut self.updated_at, insert);

        if !matches!(self.is_current, ActiveValue::Set(true)) {
            return Ok(self);
        }

        let player = match &self.player_profile_id {
            ActiveValue::Set(id) | ActiveValue::Unchanged(id) => *id,
            ActiveValue::NotSet => {
                return Err(DbErr::Custom(
                    "current evaluation saved without a player".to_owned(),
                ))
            }
        };

        let mut demote = Entity::update_many()
            .col_expr(Column::IsCurrent, Expr::value(false))
            .filter(Column::PlayerProfileId.eq(player))
            .filter(Column::IsCurrent.eq(true));

        if let ActiveValue::Set(id) | ActiveValue::Unchanged(id) = &self.id {
            demote = demote.filter(Column::Id.ne(*id));
        }

        demote.exec(db).await?;

        Ok(self)
    }
}

impl Entity {
    #[inline]
    pub fn find_by_player(player_profile_id: Uuid) -> Select<Entity> {
        Self::find().filter(Column::PlayerProfileId.eq(player_profile_id))
    }

    #[inline]
    pub fn find_current(player_profile_id: Uuid) -> Select<Entity> {
        Self::find_by_player(player_profile_id).filter(Column::IsCurrent.eq(true))
    }
}
