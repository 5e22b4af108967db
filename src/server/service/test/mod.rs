mod auth;
mod chat_bot;
mod log;
mod post;
mod topic;
