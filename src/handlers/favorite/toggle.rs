use super::{coach_profile, visible_player};
use crate::{
    error::{self, DatabaseError, Result},
    extractors::{ActiveSubscription, Json, Path},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use entity::coach_favorites;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, QuerySelect, Set, TransactionTrait};
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize)]
pub struct Response {
    favorited: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    favorite: Option<coach_favorites::Model>,
}

/// Bookmarks the player, or removes the bookmark if there is one.
pub async fn toggle_favorite<S: StateTrait>(
    State(state): State<S>,
    ActiveSubscription(user): ActiveSubscription,
    Path(player_id): Path<Uuid>,
) -> Result<(StatusCode, Json<Response>)> {
    let txn = state.db().begin().await?;

    let coach = coach_profile(&txn, &user).await?;

    let existing = coach_favorites::Entity::find_pair(coach.id, player_id)
        .lock_exclusive()
        .one(&txn)
        .await?;

    if let Some(favorite) = existing {
        favorite.delete(&txn).await?;
        txn.commit().await?;

        return Ok((
            StatusCode::OK,
            Json(Response {
                favorited: false,
                favorite: None,
            }),
        ));
    }

    let player = visible_player(&txn, player_id).await?;

    let favorite = coach_favorites::ActiveModel {
        id: Set(Uuid::new_v4()),
        coach_profile_id: Set(coach.id),
        player_profile_id: Set(player.id),
        priority: Set(Default::default()),
        status: Set(Default::default()),
        notes: Set(None),
        ..Default::default()
    }
    .insert(&txn)
    .await;

    // a concurrent toggle inserted the pair first
    let favorite = match favorite {
        Err(err) if err.unique_violation() => return Err(error::FAVORITE_EXISTS),
        r => r?,
    };

    txn.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(Response {
            favorited: true,
            favorite: Some(favorite),
        }),
    ))
}
