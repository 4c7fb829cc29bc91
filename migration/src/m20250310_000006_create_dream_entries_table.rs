use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DreamEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DreamEntries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DreamEntries::UserId).integer().not_null())
                    .col(ColumnDef::new(DreamEntries::Title).string().not_null())
                    .col(ColumnDef::new(DreamEntries::Abstract).text().not_null())
                    .col(
                        ColumnDef::new(DreamEntries::OriginalDream)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DreamEntries::RewrittenDream)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DreamEntries::Times)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(DreamEntries::CreatedDate)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(DreamEntries::SessionId).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dream_entries_user_id")
                            .from(DreamEntries::Table, DreamEntries::UserId)
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
                    .name("idx_dream_entries_user_id")
                    .table(DreamEntries::Table)
                    .col(DreamEntries::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_dream_entries_user_id")
                    .table(DreamEntries::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DreamEntries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DreamEntries {
    Table,
    Id,
    UserId,
    Title,
    Abstract,
    OriginalDream,
    RewrittenDream,
    Times,
    CreatedDate,
    SessionId,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
