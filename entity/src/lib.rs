pub mod chat_messages;
pub mod dream_entries;
pub mod email_verification_tokens;
pub mod password_reset_tokens;
pub mod summaries;
pub mod users;

pub mod prelude {
    pub use super::chat_messages::Entity as ChatMessages;
    pub use super::dream_entries::Entity as DreamEntries;
    pub use super::email_verification_tokens::Entity as EmailVerificationTokens;
    pub use super::password_reset_tokens::Entity as PasswordResetTokens;
    pub use super::summaries::Entity as Summaries;
    pub use super::users::Entity as Users;
}
