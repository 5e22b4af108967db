use sea_orm_migration::{prelude::*, schema::*};

use super::m20261002_000006_create_chat_bot_table::ChatBot;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Chat::Table)
                    .if_not_exists()
                    .col(pk_auto(Chat::Id))
                    .col(integer(Chat::ChatBotId))
                    .col(string(Chat::Name))
                    .col(string(Chat::ExternalId))
                    .col(timestamp_with_time_zone(Chat::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chat_chat_bot_id")
                            .from(Chat::Table, Chat::ChatBotId)
                            .to(ChatBot::Table, ChatBot::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Chat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Chat {
    Table,
    Id,
    ChatBotId,
    Name,
    ExternalId,
    CreatedAt,
}
