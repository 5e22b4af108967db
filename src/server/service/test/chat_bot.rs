use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{messenger::MessengerError, AppError},
    model::{
        chat_bot::{CreateChatBotParams, CreateChatParams, Platform},
        paging::{PageRequest, QueryDescriptor},
    },
    service::chat_bot::ChatBotService,
};

/// Tests that Discord bots must carry a Discord webhook URL.
///
/// Expected: InvalidWebhookUrl for other URLs, Ok for a webhook URL
#[tokio::test]
async fn discord_bot_requires_webhook_url() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_messenger_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ChatBotService::new(db);
    let params = |token: &str| CreateChatBotParams {
        name: "Announcements".to_string(),
        platform: Platform::Discord,
        token: token.to_string(),
    };

    let result = service.create(params("https://example.com/api/webhooks/1/abc")).await;
    assert!(matches!(
        result,
        Err(AppError::MessengerErr(MessengerError::InvalidWebhookUrl(_)))
    ));

    let bot = service
        .create(params("https://discord.com/api/webhooks/1/abc"))
        .await?;
    assert_eq!(bot.platform, Platform::Discord);

    Ok(())
}

/// Tests chat creation rules.
///
/// Expected: NotFound for a missing bot, BadRequest for a Telegram chat without chat id
#[tokio::test]
async fn create_chat_checks_bot_and_external_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_messenger_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let bot = factory::create_chat_bot(db).await?;
    let service = ChatBotService::new(db);

    let missing_bot = service
        .create_chat(CreateChatParams {
            chat_bot_id: bot.id + 100,
            name: "General".to_string(),
            external_id: "-100".to_string(),
        })
        .await;
    assert!(matches!(missing_bot, Err(AppError::NotFound(_))));

    let missing_external_id = service
        .create_chat(CreateChatParams {
            chat_bot_id: bot.id,
            name: "General".to_string(),
            external_id: " ".to_string(),
        })
        .await;
    assert!(matches!(missing_external_id, Err(AppError::BadRequest(_))));

    let chat = service
        .create_chat(CreateChatParams {
            chat_bot_id: bot.id,
            name: "General".to_string(),
            external_id: "-100".to_string(),
        })
        .await?;
    assert_eq!(chat.chat_bot_id, bot.id);

    Ok(())
}

/// Tests that listing chats by bot ignores a caller filter on another bot.
///
/// Expected: only the requested bot's chats
#[tokio::test]
async fn lists_chats_of_one_bot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_messenger_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (bot, _) = factory::helpers::create_chat_with_bot(db).await?;
    factory::create_chat(db, bot.id).await?;
    let (other, _) = factory::helpers::create_chat_with_bot(db).await?;

    let request = PageRequest::from_descriptor(
        QueryDescriptor::new().with("where__chatBotId", other.id.to_string()),
    )?;
    let page = ChatBotService::new(db)
        .get_chats_paged(bot.id, &request)
        .await?;

    assert_eq!(page.info.total, 2);
    assert!(page.data.iter().all(|chat| chat.chat_bot_id == bot.id));

    Ok(())
}

/// Tests that deleting a bot removes its chats.
///
/// Expected: chat no longer found after its bot is deleted
#[tokio::test]
async fn deleting_bot_removes_chats() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_messenger_tables()
        .with_table(entity::prelude::Log)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (bot, chat) = factory::helpers::create_chat_with_bot(db).await?;
    let service = ChatBotService::new(db);

    assert!(service.delete(bot.id).await?);
    assert!(service.get_chat(chat.id).await?.is_none());
    assert!(service.get_by_id(bot.id).await?.is_none());

    Ok(())
}
