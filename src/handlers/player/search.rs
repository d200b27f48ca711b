use super::PlayerView;
use crate::{
    error::Result,
    extractors::{ensure_subscription, AuthUser, Json, Query},
    StateTrait,
};
use axum::extract::State;
use entity::{
    njcaa_colleges,
    player_profiles::{self, Position},
    users::UserType,
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

const DEFAULT_PER_PAGE: u64 = 20;

#[derive(Debug, Deserialize, Validate)]
pub struct SearchQuery {
    position: Option<Position>,
    #[validate(range(min = 2000, max = 2100))]
    graduation_year: Option<i16>,
    #[validate(length(equal = 2))]
    state: Option<String>,
    #[validate(range(min = 1, max = 24))]
    region: Option<i16>,
    college_id: Option<Uuid>,
    #[validate(range(min = 1, max = 10000))]
    page: Option<u64>,
    #[validate(range(min = 1, max = 100))]
    per_page: Option<u64>,
}

#[derive(Serialize)]
pub struct Response {
    players: Vec<PlayerView>,
    page: u64,
    per_page: u64,
    total: u64,
}

/// Visible players only, ordered by name.
pub async fn search_players<S: StateTrait>(
    State(state): State<S>,
    user: AuthUser,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Response>> {
    if user.is(UserType::Coach) {
        ensure_subscription(state.db(), &user).await?;
    }

    let mut select = player_profiles::Entity::find_visible()
        .find_also_related(njcaa_colleges::Entity)
        .order_by_asc(player_profiles::Column::LastName)
        .order_by_asc(player_profiles::Column::FirstName)
        .order_by_asc(player_profiles::Column::Id);

    if let Some(position) = query.position {
        select = select.filter(player_profiles::Column::Position.eq(position));
    }

    if let Some(graduation_year) = query.graduation_year {
        select = select.filter(player_profiles::Column::GraduationYear.eq(graduation_year));
    }

    if let Some(college_id) = query.college_id {
        select = select.filter(player_profiles::Column::CollegeId.eq(college_id));
    }

    if let Some(college_state) = query.state {
        select = select.filter(njcaa_colleges::Column::State.eq(college_state.to_uppercase()));
    }

    if let Some(region) = query.region {
        select = select.filter(njcaa_colleges::Column::Region.eq(region));
    }

    let page = query.page.unwrap_or(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PER_PAGE);

    let paginator = select.paginate(state.db(), per_page);
    let total = paginator.num_items().await?;
    let players = paginator.fetch_page(page - 1).await?;

    Ok(Json(Response {
        players: players.into_iter().map(PlayerView::from).collect(),
        page,
        per_page,
        total,
    }))
}
