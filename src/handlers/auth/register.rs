use crate::{
    error::{self, DatabaseError, Result},
    extractors::{Json, ValidatedJson},
    utils::{generate_token, hash_password},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use entity::{
    coach_profiles, ncaa_colleges, njcaa_coach_profiles, njcaa_colleges,
    player_profiles::{self, Position},
    users::{self, UserType},
};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, PaginatorTrait, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(email, length(max = 255))]
    email: String,
    #[validate(length(min = 8, max = 128))]
    password: String,
    user_type: UserType,
    #[validate(length(min = 1, max = 64))]
    first_name: String,
    #[validate(length(min = 1, max = 64))]
    last_name: String,
    college_id: Uuid,
    position: Option<Position>,
    #[validate(range(min = 2000, max = 2100))]
    graduation_year: Option<i16>,
}

#[derive(Serialize)]
pub struct Response {
    id: Uuid,
    token: String,
}

/// Creates the account and the profile matching its role in one transaction.
pub async fn register<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    if request.user_type == UserType::Admin {
        warn!(email = request.email, "tried to register an admin account");
        return Err(error::ADMIN_REGISTRATION);
    }

    let player = match request.user_type {
        UserType::Player => match (request.position, request.graduation_year) {
            (Some(position), Some(graduation_year)) => Some((position, graduation_year)),
            _ => return Err(error::MISSING_PLAYER_FIELDS),
        },
        _ => None,
    };

    let password_hash = hash_password(request.password).await?;
    let verification_token = generate_token(&mut state.rng());

    let txn = state.db().begin().await?;

    if !college_exists(&txn, request.user_type, request.college_id).await? {
        return Err(error::COLLEGE_NOT_FOUND);
    }

    let user = users::ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(request.email.to_lowercase()),
        password_hash: Set(password_hash),
        user_type: Set(request.user_type),
        is_verified: Set(false),
        verification_token: Set(Some(verification_token.clone())),
        reset_token: Set(None),
        reset_token_expires_at: Set(None),
        last_login_at: Set(None),
        ..Default::default()
    };

    let user = match user.insert(&txn).await {
        Err(err) if err.unique_violation() => return Err(error::EMAIL_TAKEN),
        r => r?,
    };

    match (user.user_type, player) {
        (UserType::Player, Some((position, graduation_year))) => {
            player_profiles::ActiveModel {
                id: Set(Uuid::new_v4()),
                user_id: Set(user.id),
                first_name: Set(request.first_name),
                last_name: Set(request.last_name),
                position: Set(position),
                graduation_year: Set(graduation_year),
                college_id: Set(request.college_id),
                height_cm: Set(None),
                weight_kg: Set(None),
                gpa: Set(None),
                preferred_foot: Set(None),
                bio: Set(None),
                highlight_video_url: Set(None),
                games_played: Set(0),
                goals: Set(0),
                assists: Set(0),
                is_visible: Set(false),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }
        (UserType::Coach, _) => {
            coach_profiles::ActiveModel {
                id: Set(Uuid::new_v4()),
                user_id: Set(user.id),
                first_name: Set(request.first_name),
                last_name: Set(request.last_name),
                title: Set(None),
                phone: Set(None),
                college_id: Set(request.college_id),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }
        (UserType::NjcaaCoach, _) => {
            njcaa_coach_profiles::ActiveModel {
                id: Set(Uuid::new_v4()),
                user_id: Set(user.id),
                first_name: Set(request.first_name),
                last_name: Set(request.last_name),
                title: Set(None),
                phone: Set(None),
                college_id: Set(request.college_id),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }
        _ => return Err(error::INTERNAL),
    }

    txn.commit().await?;

    info!(
        user_id = user.id.to_string(),
        role = user.user_type.as_str(),
        "registered user"
    );
    // verification mails are sent by a separate service, the token is logged for development
    debug!(token = verification_token, "issued verification token");

    let token = state.jwt().issue(user.id, user.user_type)?;

    Ok((StatusCode::CREATED, Json(Response { id: user.id, token })))
}

/// Players and NJCAA coaches belong to NJCAA colleges, coaches to NCAA/NAIA ones.
async fn college_exists<C>(db: &C, user_type: UserType, college_id: Uuid) -> Result<bool>
where
    C: ConnectionTrait,
{
    let count = match user_type {
        UserType::Coach => ncaa_colleges::Entity::find_by_id(college_id).count(db).await?,
        _ => njcaa_colleges::Entity::find_by_id(college_id).count(db).await?,
    };

    Ok(count > 0)
}
