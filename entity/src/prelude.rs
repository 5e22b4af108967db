pub use super::chat::Entity as Chat;
pub use super::chat_bot::Entity as ChatBot;
pub use super::log::Entity as Log;
pub use super::post::Entity as Post;
pub use super::series::Entity as Series;
pub use super::topic::Entity as Topic;
pub use super::user::Entity as User;
pub use super::user_permission::Entity as UserPermission;
