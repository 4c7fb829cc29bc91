use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Username).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Password).string_len(255).not_null())
                    .col(ColumnDef::new(Users::HeaderImageUrl).string())
                    .col(ColumnDef::new(Users::ProfileImageUrl).string())
                    .col(ColumnDef::new(Users::Name).string_len(255))
                    .col(ColumnDef::new(Users::Surname).string_len(255))
                    .col(ColumnDef::new(Users::DateOfBirth).date())
                    .col(ColumnDef::new(Users::PhoneNumber).string_len(255))
                    .col(ColumnDef::new(Users::Gender).string_len(255))
                    .col(ColumnDef::new(Users::Region).string_len(255))
                    .col(ColumnDef::new(Users::Education).string_len(255))
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    Password,
    HeaderImageUrl,
    ProfileImageUrl,
    Name,
    Surname,
    DateOfBirth,
    PhoneNumber,
    Gender,
    Region,
    Education,
    CreatedAt,
    UpdatedAt,
}
