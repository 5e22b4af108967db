use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChatBot::Table)
                    .if_not_exists()
                    .col(pk_auto(ChatBot::Id))
                    .col(string(ChatBot::Name))
                    .col(string(ChatBot::Platform))
                    .col(string(ChatBot::Token))
                    .col(timestamp_with_time_zone(ChatBot::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChatBot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChatBot {
    Table,
    Id,
    Name,
    Platform,
    Token,
    CreatedAt,
}
