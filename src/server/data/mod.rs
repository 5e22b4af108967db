//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models where the conversion cannot fail. Every list operation goes through the
//! generic paging engine in `paging`, and each repository declares the `Collection` schema
//! its listing may be filtered and sorted by.

pub mod chat;
pub mod chat_bot;
pub mod log;
pub mod paging;
pub mod post;
pub mod series;
pub mod topic;
pub mod user;
pub mod user_permission;

#[cfg(test)]
mod test;
