use super::{njcaa_coach_profiles, player_profiles};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

pub mod constraints {
    pub const PK_NJCAA_COLLEGES: &str = "PK_njcaa_colleges";
    pub const UC_NJCAA_COLLEGES_NAME_STATE: &str = "UC_njcaa_colleges_name_state";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "njcaa_colleges")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub state: String,
    pub region: i16,
    pub division: Division,
    pub created_at: DateTimeUtc,
}

#[derive(
    EnumIter, DeriveActiveEnum, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(2))")]
pub enum Division {
    #[sea_orm(string_value = "D1")]
    D1,
    #[sea_orm(string_value = "D2")]
    D2,
    #[sea_orm(string_value = "D3")]
    D3,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Players,
    Coaches,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Players => Entity::has_many(player_profiles::Entity).into(),
            Self::Coaches => Entity::has_many(njcaa_coach_profiles::Entity).into(),
        }
    }
}

impl Related<player_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Players.def()
    }
}

impl Related<njcaa_coach_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Coaches.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert && self.created_at.is_not_set() {
            self.created_at = Set(Utc::now());
        }

        Ok(self)
    }
}
