use sea_orm::entity::prelude::*;

/// Owner of every other row in the schema. All child tables reference
/// `users.id` with cascade delete, so removing a user removes their
/// tokens, chat transcript, summaries and dream entries in one go.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub header_image_url: Option<String>,
    pub profile_image_url: Option<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub date_of_birth: Option<Date>,
    pub phone_number: Option<String>,
    pub gender: Option<String>,
    pub region: Option<String>,
    pub education: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    PasswordResetTokens,
    EmailVerificationTokens,
    ChatMessages,
    Summaries,
    DreamEntries,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::PasswordResetTokens => {
                Entity::has_many(super::password_reset_tokens::Entity).into()
            }
            Self::EmailVerificationTokens => {
                Entity::has_many(super::email_verification_tokens::Entity).into()
            }
            Self::ChatMessages => Entity::has_many(super::chat_messages::Entity).into(),
            Self::Summaries => Entity::has_many(super::summaries::Entity).into(),
            Self::DreamEntries => Entity::has_many(super::dream_entries::Entity).into(),
        }
    }
}

impl Related<super::password_reset_tokens::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PasswordResetTokens.def()
    }
}

impl Related<super::email_verification_tokens::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmailVerificationTokens.def()
    }
}

impl Related<super::chat_messages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChatMessages.def()
    }
}

impl Related<super::summaries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Summaries.def()
    }
}

impl Related<super::dream_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DreamEntries.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use sea_orm::ActiveValue::Set;

        if !insert {
            // Only touch updated_at on UPDATE, not INSERT
            self.updated_at = Set(chrono::Utc::now().naive_utc());
        }

        Ok(self)
    }
}
