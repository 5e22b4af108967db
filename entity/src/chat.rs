use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "chat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub chat_bot_id: i32,
    pub name: String,
    pub external_id: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::chat_bot::Entity",
        from = "Column::ChatBotId",
        to = "super::chat_bot::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ChatBot,
}

impl Related<super::chat_bot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChatBot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
