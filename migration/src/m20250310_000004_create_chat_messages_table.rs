use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChatMessages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ChatMessages::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ChatMessages::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(ChatMessages::ConversationId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ChatMessages::SessionId).string().not_null())
                    .col(ColumnDef::new(ChatMessages::Message).text().not_null())
                    .col(
                        ColumnDef::new(ChatMessages::IsFromUser)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChatMessages::Timestamp)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ChatMessages::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(ChatMessages::Stage).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chat_messages_user_id")
                            .from(ChatMessages::Table, ChatMessages::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_chat_messages_user_id")
                    .table(ChatMessages::Table)
                    .col(ChatMessages::UserId)
                    .to_owned(),
            )
            .await?;

        // Conversations are replayed as a whole, so index the grouping key too
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_chat_messages_conversation_id")
                    .table(ChatMessages::Table)
                    .col(ChatMessages::ConversationId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_chat_messages_conversation_id")
                    .table(ChatMessages::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_chat_messages_user_id")
                    .table(ChatMessages::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ChatMessages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ChatMessages {
    Table,
    Id,
    UserId,
    ConversationId,
    SessionId,
    Message,
    IsFromUser,
    Timestamp,
    IsActive,
    Stage,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
