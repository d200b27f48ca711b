use anyhow::{bail, Context};
use dotenvy::dotenv;
use entity::{
    coach_profiles, njcaa_coach_profiles, player_profiles,
    users::{self, UserType},
};
use portall_backend::hash_password;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, EntityTrait, IntoActiveModel,
    QueryFilter, Set, TransactionTrait,
};
use std::env::{self, args};
use uuid::Uuid;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let (Some(email), Some(password)) = (args().nth(1), args().nth(2)) else {
        bail!("usage: create_admin_user <email> <password>");
    };

    let database_url = env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
    let database = Database::connect(&database_url).await?;

    let password_hash = hash_password(password)
        .await
        .map_err(|err| anyhow::anyhow!("failed to hash password: {}", err.message()))?;

    let user = upsert_admin(&database, &email.to_lowercase(), password_hash).await?;

    println!("{}", user.id);

    Ok(())
}

/// Creates the admin, or promotes an existing account. Admins have no
/// profile, so a promoted account loses the one it had.
async fn upsert_admin(
    database: &DatabaseConnection,
    email: &str,
    password_hash: String,
) -> anyhow::Result<users::Model> {
    let txn = database.begin().await?;

    let user = match users::Entity::find_by_email(email).one(&txn).await? {
        Some(user) => {
            player_profiles::Entity::delete_many()
                .filter(player_profiles::Column::UserId.eq(user.id))
                .exec(&txn)
                .await?;
            coach_profiles::Entity::delete_many()
                .filter(coach_profiles::Column::UserId.eq(user.id))
                .exec(&txn)
                .await?;
            njcaa_coach_profiles::Entity::delete_many()
                .filter(njcaa_coach_profiles::Column::UserId.eq(user.id))
                .exec(&txn)
                .await?;

            let mut active_model = user.into_active_model();
            active_model.user_type = Set(UserType::Admin);
            active_model.password_hash = Set(password_hash);
            active_model.is_verified = Set(true);
            active_model.verification_token = Set(None);
            active_model.update(&txn).await?
        }
        None => {
            users::ActiveModel {
                id: Set(Uuid::new_v4()),
                email: Set(email.to_owned()),
                password_hash: Set(password_hash),
                user_type: Set(UserType::Admin),
                is_verified: Set(true),
                verification_token: Set(None),
                reset_token: Set(None),
                reset_token_expires_at: Set(None),
                last_login_at: Set(None),
                ..Default::default()
            }
            .insert(&txn)
            .await?
        }
    };

    txn.commit().await?;

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::{
        njcaa_colleges::{self, Division},
        player_profiles::Position,
    };
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, PaginatorTrait};

    async fn database() -> DatabaseConnection {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.min_connections(1).max_connections(1).sqlx_logging(false);

        let db = Database::connect(opts).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    async fn player(db: &DatabaseConnection, email: &str) -> Uuid {
        let college = njcaa_colleges::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set("Harbor College".to_owned()),
            state: Set("CA".to_owned()),
            region: Set(2),
            division: Set(Division::D1),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();

        let user = users::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email.to_owned()),
            password_hash: Set("hash".to_owned()),
            user_type: Set(UserType::Player),
            is_verified: Set(false),
            verification_token: Set(None),
            reset_token: Set(None),
            reset_token_expires_at: Set(None),
            last_login_at: Set(None),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();

        player_profiles::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user.id),
            first_name: Set("Sam".to_owned()),
            last_name: Set("Rivera".to_owned()),
            position: Set(Position::Forward),
            graduation_year: Set(2026),
            college_id: Set(college.id),
            height_cm: Set(None),
            weight_kg: Set(None),
            gpa: Set(None),
            preferred_foot: Set(None),
            bio: Set(None),
            highlight_video_url: Set(None),
            games_played: Set(0),
            goals: Set(0),
            assists: Set(0),
            is_visible: Set(true),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();

        user.id
    }

    #[tokio::test]
    async fn creates_new_admin() {
        let db = database().await;

        let admin = upsert_admin(&db, "root@portall.test", "hash".to_owned())
            .await
            .unwrap();

        assert_eq!(admin.user_type, UserType::Admin);
        assert!(admin.is_verified);
    }

    #[tokio::test]
    async fn promoted_player_loses_profile() {
        let db = database().await;
        let id = player(&db, "sam@portall.test").await;

        let admin = upsert_admin(&db, "sam@portall.test", "new-hash".to_owned())
            .await
            .unwrap();

        assert_eq!(admin.id, id);
        assert_eq!(admin.user_type, UserType::Admin);
        assert_eq!(admin.password_hash, "new-hash");

        let profiles = player_profiles::Entity::find_by_user(id)
            .count(&db)
            .await
            .unwrap();
        assert_eq!(profiles, 0);
    }
}
