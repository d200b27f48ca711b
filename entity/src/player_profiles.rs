use super::{coach_favorites, njcaa_colleges, player_evaluations, users};
use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub mod constraints {
    pub const PK_PLAYER_PROFILES: &str = "PK_player_profiles";
    pub const UC_PLAYER_PROFILES_USER_ID: &str = "UC_player_profiles_user_id";
    pub const FK_PLAYER_PROFILES_USER_ID: &str = "FK_player_profiles_user_id";
    pub const FK_PLAYER_PROFILES_COLLEGE_ID: &str = "FK_player_profiles_college_id";
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "player_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub position: Position,
    pub graduation_year: i16,
    pub college_id: Uuid,
    pub height_cm: Option<i16>,
    pub weight_kg: Option<i16>,
    pub gpa: Option<f64>,
    pub preferred_foot: Option<PreferredFoot>,
    pub bio: Option<String>,
    pub highlight_video_url: Option<String>,
    pub games_played: i32,
    pub goals: i32,
    pub assists: i32,
    pub is_visible: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(
    EnumIter, DeriveActiveEnum, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[serde(rename_all = "snake_case")]
pub enum Position {
    #[sea_orm(string_value = "goalkeeper")]
    Goalkeeper,
    #[sea_orm(string_value = "defender")]
    Defender,
    #[sea_orm(string_value = "midfielder")]
    Midfielder,
    #[sea_orm(string_value = "forward")]
    Forward,
}

#[derive(
    EnumIter, DeriveActiveEnum, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(8))")]
#[serde(rename_all = "snake_case")]
pub enum PreferredFoot {
    #[sea_orm(string_value = "left")]
    Left,
    #[sea_orm(string_value = "right")]
    Right,
    #[sea_orm(string_value = "both")]
    Both,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    College,
    Favorites,
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
            Self::Favorites => Entity::has_many(coach_favorites::Entity).into(),
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

impl Related<coach_favorites::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorites.def()
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

    /// Profiles a recruiter is allowed to discover.
    #[inline]
    pub fn find_visible() -> Select<Entity> {
        Self::find().filter(Column::IsVisible.eq(true))
    }
}
