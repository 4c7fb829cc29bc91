use sea_orm::entity::prelude::*;

/// A dream entry in the user's journal.
///
/// `id` and `created_date` are assigned by the database on insert. The
/// text columns are required; `times` is the rehearsal counter and starts
/// at 0. The row is a plain data carrier, every constraint lives in the
/// schema and surfaces as a `DbErr` from the storage engine.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dream_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    #[sea_orm(column_name = "abstract", column_type = "Text")]
    pub abstract_text: String,
    #[sea_orm(column_type = "Text")]
    pub original_dream: String,
    #[sea_orm(column_type = "Text")]
    pub rewritten_dream: String,
    pub times: i32,
    pub created_date: DateTime,
    pub session_id: String,
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
