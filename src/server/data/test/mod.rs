mod chat_bot;
mod post;
mod series;
mod user;
mod user_permission;
