pub use sea_orm_migration::prelude::*;

mod m20250310_000001_create_users_table;
mod m20250310_000002_create_password_reset_tokens_table;
mod m20250310_000003_create_email_verification_tokens_table;
mod m20250310_000004_create_chat_messages_table;
mod m20250310_000005_create_summaries_table;
mod m20250310_000006_create_dream_entries_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250310_000001_create_users_table::Migration),
            Box::new(m20250310_000002_create_password_reset_tokens_table::Migration),
            Box::new(m20250310_000003_create_email_verification_tokens_table::Migration),
            Box::new(m20250310_000004_create_chat_messages_table::Migration),
            Box::new(m20250310_000005_create_summaries_table::Migration),
            Box::new(m20250310_000006_create_dream_entries_table::Migration),
        ]
    }
}
