use super::coach_profiles;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

pub mod constraints {
    pub const PK_NCAA_COLLEGES: &str = "PK_ncaa_colleges";
    pub const UC_NCAA_COLLEGES_NAME_STATE: &str = "UC_ncaa_colleges_name_state";
}

/// Four-year programs, NCAA divisions and NAIA alike.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "ncaa_colleges")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub state: String,
    pub division: Division,
    pub conference: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(
    EnumIter, DeriveActiveEnum, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(8))")]
#[serde(rename_all = "snake_case")]
pub enum Division {
    #[sea_orm(string_value = "ncaa_d1")]
    NcaaD1,
    #[sea_orm(string_value = "ncaa_d2")]
    NcaaD2,
    #[sea_orm(string_value = "ncaa_d3")]
    NcaaD3,
    #[sea_orm(string_value = "naia")]
    Naia,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Coaches,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Coaches => Entity::has_many(coach_profiles::Entity).into(),
        }
    }
}

impl Related<coach_profiles::Entity> for Entity {
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
