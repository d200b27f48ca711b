use super::{coach_favorites, ncaa_colleges, users};
use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use serde::Serialize;

pub mod constraints {
    pub const PK_COACH_PROFILES: &str = "PK_coach_profiles";
    pub const UC_COACH_PROFILES_USER_ID: &str = "UC_coach_profiles_user_id";
    pub const FK_COACH_PROFILES_USER_ID: &str = "FK_coach_profiles_user_id";
    pub const FK_COACH_PROFILES_COLLEGE_ID: &str = "FK_coach_profiles_college_id";
}

/// Recruiter at an NCAA or NAIA program.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "coach_profiles")]
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
    Favorites,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::User => Entity::belongs_to(users::Entity)
                .from(Column::UserId)
                .to(users::Column::Id)
                .into(),
            Self::College => Entity::belongs_to(ncaa_colleges::Entity)
                .from(Column::CollegeId)
                .to(ncaa_colleges::Column::Id)
                .into(),
            Self::Favorites => Entity::has_many(coach_favorites::Entity).into(),
        }
    }
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<ncaa_colleges::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::College.def()
    }
}

impl Related<coach_favorites::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorites.def()
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
