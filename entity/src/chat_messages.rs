use sea_orm::entity::prelude::*;

/// One line of a guided-rehearsal conversation. `is_from_user` separates
/// the user's messages from the assistant's; `stage` tracks where in the
/// conversation flow the message was produced.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "chat_messages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub conversation_id: String,
    pub session_id: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub is_from_user: bool,
    pub timestamp: DateTime,
    pub is_active: bool,
    pub stage: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
