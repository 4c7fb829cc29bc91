use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Summaries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Summaries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Summaries::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(Summaries::ConversationId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Summaries::SessionId).string().not_null())
                    .col(ColumnDef::new(Summaries::Title).string().not_null())
                    .col(ColumnDef::new(Summaries::Abstract).string().not_null())
                    .col(ColumnDef::new(Summaries::OriginalDream).text().not_null())
                    .col(ColumnDef::new(Summaries::RewrittenDream).text().not_null())
                    .col(
                        ColumnDef::new(Summaries::Selected)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Summaries::Timestamp)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_summaries_user_id")
                            .from(Summaries::Table, Summaries::UserId)
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
                    .name("idx_summaries_user_id")
                    .table(Summaries::Table)
                    .col(Summaries::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_summaries_user_id")
                    .table(Summaries::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Summaries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Summaries {
    Table,
    Id,
    UserId,
    ConversationId,
    SessionId,
    Title,
    Abstract,
    OriginalDream,
    RewrittenDream,
    Selected,
    Timestamp,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
