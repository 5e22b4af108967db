//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle unique values, and the
//! helpers create dependent rows (authors for posts, bots for chats) when needed.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::create_user(&db).await?;
//!     let topic = factory::create_topic(&db).await?;
//!
//!     // Create with all dependencies
//!     let (author, topic, post) = factory::helpers::create_post_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let post = factory::post::PostFactory::new(&db, author.id)
//!     .title("Hello")
//!     .topic_id(topic.id)
//!     .published(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities (with a known password)
//! - `user_permission` - Grant permission strings to users
//! - `topic` - Create topic entities
//! - `series` - Create series entities
//! - `post` - Create post entities
//! - `chat_bot` - Create chat bot entities
//! - `chat` - Create chat entities
//! - `log` - Create log entries
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod chat;
pub mod chat_bot;
pub mod helpers;
pub mod log;
pub mod post;
pub mod series;
pub mod topic;
pub mod user;
pub mod user_permission;

// Re-export commonly used factory functions for concise usage
pub use chat::create_chat;
pub use chat_bot::create_chat_bot;
pub use log::create_log;
pub use post::create_post;
pub use series::create_series;
pub use topic::create_topic;
pub use user::create_user;
pub use user_permission::grant_permission;
