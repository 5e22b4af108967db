pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_user_table;
mod m20261001_000002_create_user_permission_table;
mod m20261001_000003_create_topic_table;
mod m20261001_000004_create_series_table;
mod m20261001_000005_create_post_table;
mod m20261002_000006_create_chat_bot_table;
mod m20261002_000007_create_chat_table;
mod m20261003_000008_create_log_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_user_table::Migration),
            Box::new(m20261001_000002_create_user_permission_table::Migration),
            Box::new(m20261001_000003_create_topic_table::Migration),
            Box::new(m20261001_000004_create_series_table::Migration),
            Box::new(m20261001_000005_create_post_table::Migration),
            Box::new(m20261002_000006_create_chat_bot_table::Migration),
            Box::new(m20261002_000007_create_chat_table::Migration),
            Box::new(m20261003_000008_create_log_table::Migration),
        ]
    }
}
