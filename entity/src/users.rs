use super::{coach_profiles, njcaa_coach_profiles, player_profiles, user_subscriptions};
use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub mod constraints {
    pub const PK_USERS: &str = "PK_users";
    pub const UC_USERS_EMAIL: &str = "UC_users_email";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub user_type: UserType,
    pub is_verified: bool,
    pub verification_token: Option<String>,
    pub reset_token: Option<String>,
    pub reset_token_expires_at: Option<DateTimeUtc>,
    pub last_login_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(
    EnumIter, DeriveActiveEnum, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    #[sea_orm(string_value = "player")]
    Player,
    #[sea_orm(string_value = "coach")]
    Coach,
    #[sea_orm(string_value = "njcaa_coach")]
    NjcaaCoach,
    #[sea_orm(string_value = "admin")]
    Admin,
}

impl UserType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Coach => "coach",
            Self::NjcaaCoach => "njcaa_coach",
            Self::Admin => "admin",
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    PlayerProfile,
    CoachProfile,
    NjcaaCoachProfile,
    Subscription,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::PlayerProfile => Entity::has_one(player_profiles::Entity).into(),
            Self::CoachProfile => Entity::has_one(coach_profiles::Entity).into(),
            Self::NjcaaCoachProfile => Entity::has_one(njcaa_coach_profiles::Entity).into(),
            Self::Subscription => Entity::has_one(user_subscriptions::Entity).into(),
        }
    }
}

impl Related<player_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerProfile.def()
    }
}

impl Related<coach_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CoachProfile.def()
    }
}

impl Related<njcaa_coach_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NjcaaCoachProfile.def()
    }
}

impl Related<user_subscriptions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subscription.def()
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
    pub fn find_by_email(email: &str) -> Select<Entity> {
        Self::find().filter(Column::Email.eq(email.to_lowercase()))
    }

    #[inline]
    pub fn find_by_verification_token(token: &str) -> Select<Entity> {
        Self::find().filter(Column::VerificationToken.eq(token))
    }

    #[inline]
    pub fn find_by_reset_token(token: &str) -> Select<Entity> {
        Self::find().filter(Column::ResetToken.eq(token))
    }
}
