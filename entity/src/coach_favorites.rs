use super::{coach_profiles, player_profiles};
use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub mod constraints {
    pub const PK_COACH_FAVORITES: &str = "PK_coach_favorites";
    pub const UC_COACH_FAVORITES_PAIR: &str = "UC_coach_favorites_pair";
    pub const FK_COACH_FAVORITES_COACH: &str = "FK_coach_favorites_coach";
    pub const FK_COACH_FAVORITES_PLAYER: &str = "FK_coach_favorites_player";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "coach_favorites")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub coach_profile_id: Uuid,
    pub player_profile_id: Uuid,
    pub priority: Priority,
    pub status: RecruitingStatus,
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(
    EnumIter,
    DeriveActiveEnum,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(8))")]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    #[sea_orm(string_value = "low")]
    Low,
    #[default]
    #[sea_orm(string_value = "medium")]
    Medium,
    #[sea_orm(string_value = "high")]
    High,
}

/// Where the player sits in the coach's recruiting pipeline.
#[derive(
    EnumIter,
    DeriveActiveEnum,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[serde(rename_all = "snake_case")]
pub enum RecruitingStatus {
    #[default]
    #[sea_orm(string_value = "interested")]
    Interested,
    #[sea_orm(string_value = "contacted")]
    Contacted,
    #[sea_orm(string_value = "visited")]
    Visited,
    #[sea_orm(string_value = "offered")]
    Offered,
    #[sea_orm(string_value = "committed")]
    Committed,
    #[sea_orm(string_value = "not_interested")]
    NotInterested,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Coach,
    Player,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Coach => Entity::belongs_to(coach_profiles::Entity)
                .from(Column::CoachProfileId)
                .to(coach_profiles::Column::Id)
                .into(),
            Self::Player => Entity::belongs_to(player_profiles::Entity)
                .from(Column::PlayerProfileId)
                .to(player_profiles::Column::Id)
                .into(),
        }
    }
}

impl Related<coach_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Coach.def()
    }
}

impl Related<player_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        crate::touch(&mut self.created_at, &mut self.updated_at, insert);
        Ok(self)
    }
}

impl Entity {
    #[inline]
    pub fn find_by_coach(coach_profile_id: Uuid) -> Select<Entity> {
        Self::find().filter(Column::CoachProfileId.eq(coach_profile_id))
    }

    #[inline]
    pub fn find_pair(coach_profile_id: Uuid, player_profile_id: Uuid) -> Select<Entity> {
        Self::find_by_coach(coach_profile_id)
            .filter(Column::PlayerProfileId.eq(player_profile_id))
    }
}
