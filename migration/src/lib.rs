mod utils;

pub use sea_orm_migration::prelude::*;

mod m20240805_101500_create_njcaa_colleges_table;
mod m20240805_101600_create_ncaa_colleges_table;
mod m20240805_102000_create_users_table;
mod m20240805_103000_create_player_profiles_table;
mod m20240805_103100_create_coach_profiles_table;
mod m20240805_103200_create_njcaa_coach_profiles_table;
mod m20240806_090000_create_coach_favorites_table;
mod m20240806_091500_create_player_evaluations_table;
mod m20240807_120000_create_subscription_plans_table;
mod m20240807_121000_create_user_subscriptions_table;
mod m20240807_122000_create_payment_history_table;
mod m20240807_123000_seed_subscription_plans;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240805_101500_create_njcaa_colleges_table::Migration),
            Box::new(m20240805_101600_create_ncaa_colleges_table::Migration),
            Box::new(m20240805_102000_create_users_table::Migration),
            Box::new(m20240805_103000_create_player_profiles_table::Migration),
            Box::new(m20240805_103100_create_coach_profiles_table::Migration),
            Box::new(m20240805_103200_create_njcaa_coach_profiles_table::Migration),
            Box::new(m20240806_090000_create_coach_favorites_table::Migration),
            Box::new(m20240806_091500_create_player_evaluations_table::Migration),
            Box::new(m20240807_120000_create_subscription_plans_table::Migration),
            Box::new(m20240807_121000_create_user_subscriptions_table::Migration),
            Box::new(m20240807_122000_create_payment_history_table::Migration),
            Box::new(m20240807_123000_seed_subscription_plans::Migration),
        ]
    }
}
