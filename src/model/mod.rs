//! Wire DTOs exchanged with API clients.

pub mod api;
pub mod chat_bot;
pub mod log;
pub mod paging;
pub mod post;
pub mod series;
pub mod topic;
pub mod user;
