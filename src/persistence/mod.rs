pub mod dream_entry_repository;
pub mod user_repository;
