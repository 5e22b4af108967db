//! SeaORM entity models for the inkpress database schema.
//!
//! Each module mirrors one table created by the `migration` crate. The `prelude` module
//! re-exports every entity under its table-oriented name for concise use in queries.

pub mod prelude;

pub mod chat;
pub mod chat_bot;
pub mod log;
pub mod post;
pub mod series;
pub mod topic;
pub mod user;
pub mod user_permission;
