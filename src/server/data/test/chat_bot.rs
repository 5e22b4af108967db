use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::chat_bot::ChatBotRepository,
    error::paging::PagingError,
    model::{
        chat_bot::{CreateChatBotParams, Platform},
        paging::{PageRequest, QueryDescriptor},
    },
};

/// Tests that the platform is stored by its lowercase name.
///
/// Expected: "discord" in the platform column
#[tokio::test]
async fn stores_platform_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_messenger_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let bot = ChatBotRepository::new(db)
        .create(CreateChatBotParams {
            name: "Announcements".to_string(),
            platform: Platform::Discord,
            token: "https://discord.com/api/webhooks/1/abc".to_string(),
        })
        .await?;

    assert_eq!(bot.platform, "discord");
    assert!(ChatBotRepository::new(db)
        .find_by_id(bot.id)
        .await?
        .is_some());

    Ok(())
}

/// Tests that deleting a bot removes its chats through the foreign key.
///
/// Expected: no chats left after the bot is gone
#[tokio::test]
async fn delete_removes_chats() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_messenger_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let bot = factory::create_chat_bot(db).await?;
    factory::create_chat(db, bot.id).await?;
    factory::create_chat(db, bot.id).await?;

    assert!(ChatBotRepository::new(db).delete(bot.id).await?);
    assert!(!ChatBotRepository::new(db).delete(bot.id).await?);

    let remaining = entity::prelude::Chat::find().all(db).await?;
    assert!(remaining.is_empty());

    Ok(())
}

/// Tests filtering the bot listing by platform.
///
/// Expected: only Discord bots
#[tokio::test]
async fn lists_bots_by_platform() -> Result<(), PagingError> {
    let test = TestBuilder::new()
        .with_messenger_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_chat_bot(db).await?;
    factory::chat_bot::ChatBotFactory::new(db)
        .platform("discord")
        .build()
        .await?;

    let request =
        PageRequest::from_descriptor(QueryDescriptor::new().with("where__platform", "discord"))?;
    let page = ChatBotRepository::new(db).get_paged(&request).await?;

    assert_eq!(page.info.total, 1);
    assert_eq!(page.data[0].platform, "discord");

    Ok(())
}
