use crate::{
    error::Result,
    extractors::{Json, Query},
    utils::{contains_pattern, LIKE_ESCAPE},
    StateTrait,
};
use axum::extract::State;
use entity::{ncaa_colleges, njcaa_colleges};
use sea_orm::{
    sea_query::{Expr, Func, IntoColumnRef, LikeExpr, SimpleExpr},
    ColumnTrait, EntityTrait, QueryFilter, QueryOrder,
};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct NjcaaQuery {
    #[validate(length(equal = 2))]
    state: Option<String>,
    #[validate(range(min = 1, max = 24))]
    region: Option<i16>,
    division: Option<njcaa_colleges::Division>,
    #[validate(length(min = 1, max = 128))]
    q: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NcaaQuery {
    #[validate(length(equal = 2))]
    state: Option<String>,
    division: Option<ncaa_colleges::Division>,
    #[validate(length(min = 1, max = 128))]
    q: Option<String>,
}

pub async fn list_njcaa<S: StateTrait>(
    State(state): State<S>,
    Query(query): Query<NjcaaQuery>,
) -> Result<Json<Vec<njcaa_colleges::Model>>> {
    let mut select = njcaa_colleges::Entity::find().order_by_asc(njcaa_colleges::Column::Name);

    if let Some(college_state) = query.state {
        select = select.filter(njcaa_colleges::Column::State.eq(college_state.to_uppercase()));
    }

    if let Some(region) = query.region {
        select = select.filter(njcaa_colleges::Column::Region.eq(region));
    }

    if let Some(division) = query.division {
        select = select.filter(njcaa_colleges::Column::Division.eq(division));
    }

    if let Some(q) = query.q {
        select = select.filter(name_contains(njcaa_colleges::Column::Name, &q));
    }

    Ok(Json(select.all(state.db()).await?))
}

pub async fn list_ncaa<S: StateTrait>(
    State(state): State<S>,
    Query(query): Query<NcaaQuery>,
) -> Result<Json<Vec<ncaa_colleges::Model>>> {
    let mut select = ncaa_colleges::Entity::find().order_by_asc(ncaa_colleges::Column::Name);

    if let Some(college_state) = query.state {
        select = select.filter(ncaa_colleges::Column::State.eq(college_state.to_uppercase()));
    }

    if let Some(division) = query.division {
        select = select.filter(ncaa_colleges::Column::Division.eq(division));
    }

    if let Some(q) = query.q {
        select = select.filter(name_contains(ncaa_colleges::Column::Name, &q));
    }

    Ok(Json(select.all(state.db()).await?))
}

/// Case-insensitive substring match on a name column.
fn name_contains(column: impl IntoColumnRef, needle: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(column)))
        .like(LikeExpr::new(contains_pattern(needle)).escape(LIKE_ESCAPE))
}
