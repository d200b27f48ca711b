use super::{njcaa_colleges, player_evaluations, users};
use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use serde::Serialize;

pub mod constraints {
    pub const PK_NJCAA_COACH_PROFILES: &str = "PK_njcaa_coach_profiles";
    pub const UC_NJCAA_COACH_PROFILES_USER_ID: &str = "UC_njcaa_coach_profiles_user_id";
    pub const FK_NJCAA_COACH_PROFILES_USER_ID: &str = "FK_njcaa_coach_profiles_user_id";
    pub const FK_NJCAA_COACH_PROFILES_COLLEGE_ID: &str = "FK_njcaa_coach_profiles_college_id";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "njcaa_coach_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub title: Option<String>,
    pub phone: Option<String>,
    pub college_id: Uuid,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    College,
    Evaluations,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::User => Entity::belongs_to(users::Entity)
                .from(Column::UserId)
                .to(users::Column::Id)
                .into(),
            Self::College => Entity::belongs_to(njcaa_colleges::Entity)
                .from(Column::CollegeId)
                .to(njcaa_colleges::Column::Id)
                .into(),
            Self::Evaluations => Entity::has_many(player_evaluations::Entity).into(),
        }
    }
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<njcaa_colleges::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::College.def()
    }
}

impl Related<player_evaluations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evaluations.def()
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
    pub fn find_by_user(user_id: Uuid) -> Select<Entity> {
        Self::find().filter(Column::UserId.eq(user_id))
    }
}
