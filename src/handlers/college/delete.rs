use super::Kind;
use crate::{
    error::{self, DatabaseError, Result},
    extractors::Path,
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use entity::{coach_profiles, ncaa_colleges, njcaa_coach_profiles, njcaa_colleges, player_profiles};
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, TransactionTrait,
};
use uuid::Uuid;

/// Colleges still referenced by a profile are kept.
pub async fn delete_college<S: StateTrait>(
    State(state): State<S>,
    Path((kind, id)): Path<(Kind, Uuid)>,
) -> Result<StatusCode> {
    let txn = state.db().begin().await?;

    if references(&txn, kind, id).await? > 0 {
        return Err(error::COLLEGE_IN_USE);
    }

    let res = match kind {
        Kind::Njcaa => njcaa_colleges::Entity::delete_by_id(id).exec(&txn).await,
        Kind::Ncaa => ncaa_colleges::Entity::delete_by_id(id).exec(&txn).await,
    };

    let res = match res {
        Err(err) if err.foreign_key_violation() => return Err(error::COLLEGE_IN_USE),
        r => r?,
    };

    if res.rows_affected == 0 {
        return Err(error::COLLEGE_NOT_FOUND);
    }

    txn.commit().await?;

    info!(college_id = id.to_string(), "deleted college");

    Ok(StatusCode::NO_CONTENT)
}

async fn references<C: ConnectionTrait>(db: &C, kind: Kind, id: Uuid) -> Result<u64> {
    let count = match kind {
        Kind::Njcaa => {
            let players = player_profiles::Entity::find()
                .filter(player_profiles::Column::CollegeId.eq(id))
                .count(db)
                .await?;

            let coaches = njcaa_coach_profiles::Entity::find()
                .filter(njcaa_coach_profiles::Column::CollegeId.eq(id))
                .count(db)
                .await?;

            players + coaches
        }
        Kind::Ncaa => {
            coach_profiles::Entity::find()
                .filter(coach_profiles::Column::CollegeId.eq(id))
                .count(db)
                .await?
        }
    };

    Ok(count)
}
