use sea_orm::entity::prelude::*;

/// Candidate summary produced at the end of a conversation. The user picks
/// one (`selected`) before it is carried over into `dream_entries`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "summaries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub conversation_id: String,
    pub session_id: String,
    pub title: String,
    #[sea_orm(column_name = "abstract")]
    pub abstract_text: String,
    #[sea_orm(column_type = "Text")]
    pub original_dream: String,
    #[sea_orm(column_type = "Text")]
    pub rewritten_dream: String,
    pub selected: bool,
    pub timestamp: DateTime,
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
