//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a post with an author and a topic.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Returns
/// - `Ok((author, topic, post))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_post_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::topic::Model,
        entity::post::Model,
    ),
    DbErr,
> {
    let author = crate::factory::user::create_user(db).await?;
    let topic = crate::factory::topic::create_topic(db).await?;
    let post = crate::factory::post::PostFactory::new(db, author.id)
        .topic_id(topic.id)
        .build()
        .await?;

    Ok((author, topic, post))
}

/// Creates a chat together with the bot it belongs to.
///
/// # Returns
/// - `Ok((bot, chat))` - Created bot and chat
/// - `Err(DbErr)` - Database error during creation
pub async fn create_chat_with_bot(
    db: &DatabaseConnection,
) -> Result<(entity::chat_bot::Model, entity::chat::Model), DbErr> {
    let bot = crate::factory::chat_bot::create_chat_bot(db).await?;
    let chat = crate::factory::chat::create_chat(db, bot.id).await?;

    Ok((bot, chat))
}
