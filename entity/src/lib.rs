pub mod coach_favorites;
pub mod coach_profiles;
pub mod ncaa_colleges;
pub mod njcaa_coach_profiles;
pub mod njcaa_colleges;
pub mod payment_history;
pub mod player_evaluations;
pub mod player_profiles;
pub mod subscription_plans;
pub mod user_subscriptions;
pub mod users;

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, Set};

/// Fills `created_at` on insert and bumps `updated_at` on every save.
pub(crate) fn touch(
    created_at: &mut ActiveValue<DateTime<Utc>>,
    updated_at: &mut ActiveValue<DateTime<Utc>>,
    insert: bool,
) {
    let now = Utc::now();

    if insert && created_at.is_not_set() {
        *created_at = Set(now);
    }

    *updated_at = Set(now);
}
