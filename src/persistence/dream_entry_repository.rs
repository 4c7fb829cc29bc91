use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use entity::dream_entries::{
    ActiveModel as DreamEntryActiveModel, Column, Entity as DreamEntryEntity,
    Model as DreamEntryModel,
};
use entity::users::Model as UserModel;

/// Insert payload for a dream entry. `id` and `created_date` are assigned
/// by the database; `times` starts at its schema default of 0.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewDreamEntry {
    pub user_id: i32,
    pub title: String,
    pub abstract_text: String,
    pub original_dream: String,
    pub rewritten_dream: String,
    pub session_id: String,
}

/// Full replacement of the editable columns, matching the PUT semantics
/// of the journal API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DreamEntryUpdate {
    pub title: String,
    pub abstract_text: String,
    pub original_dream: String,
    pub rewritten_dream: String,
    pub times: i32,
}

#[derive(Debug, Error)]
pub enum DreamEntryRepositoryError {
    #[error("dream entry not found")]
    EntryNotFound,
    #[error("owning user does not exist")]
    OwnerNotFound,
    #[error("database error: {0}")]
    Database(String),
}

#[async_trait]
pub trait DreamEntryRepository {
    async fn create(
        &self,
        entry: NewDreamEntry,
    ) -> Result<DreamEntryModel, DreamEntryRepositoryError>;
    async fn list_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<DreamEntryModel>, DreamEntryRepositoryError>;
    async fn find_for_user(
        &self,
        user_id: i32,
        entry_id: i32,
    ) -> Result<DreamEntryModel, DreamEntryRepositoryError>;
    async fn update(
        &self,
        user_id: i32,
        entry_id: i32,
        changes: DreamEntryUpdate,
    ) -> Result<DreamEntryModel, DreamEntryRepositoryError>;
    async fn delete(
        &self,
        user_id: i32,
        entry_id: i32,
    ) -> Result<DreamEntryModel, DreamEntryRepositoryError>;
    async fn owning_user(
        &self,
        entry: &DreamEntryModel,
    ) -> Result<UserModel, DreamEntryRepositoryError>;
}

#[derive(Clone, Debug)]
pub struct DreamEntryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl DreamEntryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_write_err(e: sea_orm::DbErr) -> DreamEntryRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23503") || err_str.contains("foreign key") {
            return DreamEntryRepositoryError::OwnerNotFound;
        }
        DreamEntryRepositoryError::Database(e.to_string())
    }

    async fn find_owned(
        &self,
        user_id: i32,
        entry_id: i32,
    ) -> Result<DreamEntryModel, DreamEntryRepositoryError> {
        DreamEntryEntity::find()
            .filter(Column::Id.eq(entry_id))
            .filter(Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(|e| DreamEntryRepositoryError::Database(e.to_string()))?
            .ok_or(DreamEntryRepositoryError::EntryNotFound)
    }
}

#[async_trait]
impl DreamEntryRepository for DreamEntryRepositoryPostgres {
    async fn create(
        &self,
        entry: NewDreamEntry,
    ) -> Result<DreamEntryModel, DreamEntryRepositoryError> {
        // id, times and created_date stay NotSet so the schema defaults apply
        let active_entry = DreamEntryActiveModel {
            id: NotSet,
            user_id: Set(entry.user_id),
            title: Set(entry.title),
            abstract_text: Set(entry.abstract_text),
            original_dream: Set(entry.original_dream),
            rewritten_dream: Set(entry.rewritten_dream),
            times: NotSet,
            created_date: NotSet,
            session_id: Set(entry.session_id),
        };

        let inserted = active_entry
            .insert(&*self.db)
            .await
            .map_err(Self::map_write_err)?;

        Ok(inserted)
    }

    async fn list_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<DreamEntryModel>, DreamEntryRepositoryError> {
        DreamEntryEntity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(|e| DreamEntryRepositoryError::Database(e.to_string()))
    }

    async fn find_for_user(
        &self,
        user_id: i32,
        entry_id: i32,
    ) -> Result<DreamEntryModel, DreamEntryRepositoryError> {
        self.find_owned(user_id, entry_id).await
    }

    async fn update(
        &self,
        user_id: i32,
        entry_id: i32,
        changes: DreamEntryUpdate,
    ) -> Result<DreamEntryModel, DreamEntryRepositoryError> {
        let entry = self.find_owned(user_id, entry_id).await?;

        let mut active_entry: DreamEntryActiveModel = entry.into();
        active_entry.title = Set(changes.title);
        active_entry.abstract_text = Set(changes.abstract_text);
        active_entry.original_dream = Set(changes.original_dream);
        active_entry.rewritten_dream = Set(changes.rewritten_dream);
        active_entry.times = Set(changes.times);

        let updated = active_entry
            .update(&*self.db)
            .await
            .map_err(Self::map_write_err)?;

        Ok(updated)
    }

    async fn delete(
        &self,
        user_id: i32,
        entry_id: i32,
    ) -> Result<DreamEntryModel, DreamEntryRepositoryError> {
        let entry = self.find_owned(user_id, entry_id).await?;

        let active_entry: DreamEntryActiveModel = entry.clone().into();
        active_entry
            .delete(&*self.db)
            .await
            .map_err(|e| DreamEntryRepositoryError::Database(e.to_string()))?;

        Ok(entry)
    }

    async fn owning_user(
        &self,
        entry: &DreamEntryModel,
    ) -> Result<UserModel, DreamEntryRepositoryError> {
        entry
            .find_related(entity::users::Entity)
            .one(&*self.db)
            .await
            .map_err(|e| DreamEntryRepositoryError::Database(e.to_string()))?
            .ok_or(DreamEntryRepositoryError::OwnerNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn create_test_entry_data() -> NewDreamEntry {
        NewDreamEntry {
            user_id: 1,
            title: "Falling".to_string(),
            abstract_text: "A short fall into water".to_string(),
            original_dream: "I was falling from a bridge into dark water.".to_string(),
            rewritten_dream: "I dove from the bridge and swam to the shore.".to_string(),
            session_id: "session-123".to_string(),
        }
    }

    fn mock_entry_model(id: i32, user_id: i32) -> DreamEntryModel {
        let data = create_test_entry_data();
        DreamEntryModel {
            id,
            user_id,
            title: data.title,
            abstract_text: data.abstract_text,
            original_dream: data.original_dream,
            rewritten_dream: data.rewritten_dream,
            times: 0,
            created_date: Utc::now().naive_utc(),
            session_id: data.session_id,
        }
    }

    fn mock_user_model(id: i32) -> UserModel {
        let now = Utc::now().naive_utc();
        UserModel {
            id,
            username: "testuser".to_string(),
            email: "test@example.com".to_string(),
            password: "hashed_password".to_string(),
            header_image_url: None,
            profile_image_url: None,
            name: None,
            surname: None,
            date_of_birth: None,
            phone_number: None,
            gender: None,
            region: None,
            education: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_entry_success() {
        let entry_data = create_test_entry_data();
        let mock_model = mock_entry_model(1, 1);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model.clone()]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 1,
                rows_affected: 1,
            }])
            .into_connection();

        let repository = DreamEntryRepositoryPostgres::new(Arc::new(db));

        let result = repository.create(entry_data.clone()).await;

        assert!(result.is_ok());
        let created = result.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.title, entry_data.title);
        assert_eq!(created.times, 0);
    }

    #[tokio::test]
    async fn test_create_entry_unknown_owner() {
        let entry_data = create_test_entry_data();

        let mock_db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "insert or update on table \"dream_entries\" violates foreign key constraint"
                    .to_string(),
            )])
            .into_connection();

        let repository = DreamEntryRepositoryPostgres::new(Arc::new(mock_db));

        let result = repository.create(entry_data).await;

        assert!(matches!(
            result.unwrap_err(),
            DreamEntryRepositoryError::OwnerNotFound
        ));
    }

    #[tokio::test]
    async fn test_create_entry_database_error() {
        let entry_data = create_test_entry_data();

        let mock_db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection timeout".to_string())])
            .into_connection();

        let repository = DreamEntryRepositoryPostgres::new(Arc::new(mock_db));

        let result = repository.create(entry_data).await;

        match result.unwrap_err() {
            DreamEntryRepositoryError::Database(msg) => {
                assert!(msg.contains("connection timeout"));
            }
            _ => panic!("Expected Database variant"),
        }
    }

    #[tokio::test]
    async fn test_list_for_user_returns_all_entries() {
        let mock_db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_entry_model(1, 7), mock_entry_model(2, 7)]])
            .into_connection();

        let repository = DreamEntryRepositoryPostgres::new(Arc::new(mock_db));

        let result = repository.list_for_user(7).await;

        assert!(result.is_ok());
        let entries = result.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, 1);
        assert_eq!(entries[1].id, 2);
    }

    #[tokio::test]
    async fn test_find_for_user_not_found() {
        let mock_db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<DreamEntryModel>::new()])
            .into_connection();

        let repository = DreamEntryRepositoryPostgres::new(Arc::new(mock_db));

        let result = repository.find_for_user(7, 42).await;

        assert!(matches!(
            result.unwrap_err(),
            DreamEntryRepositoryError::EntryNotFound
        ));
    }

    #[tokio::test]
    async fn test_update_entry_success() {
        let original = mock_entry_model(1, 7);
        let mut updated = original.clone();
        updated.title = "Flying".to_string();
        updated.times = 3;

        let mock_db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![original]])
            .append_query_results(vec![vec![updated.clone()]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repository = DreamEntryRepositoryPostgres::new(Arc::new(mock_db));

        let changes = DreamEntryUpdate {
            title: "Flying".to_string(),
            abstract_text: updated.abstract_text.clone(),
            original_dream: updated.original_dream.clone(),
            rewritten_dream: updated.rewritten_dream.clone(),
            times: 3,
        };

        let result = repository.update(7, 1, changes).await;

        assert!(result.is_ok(), "Failed to update entry: {:?}", result);
        let model = result.unwrap();
        assert_eq!(model.title, "Flying");
        assert_eq!(model.times, 3);
    }

    #[tokio::test]
    async fn test_update_entry_not_found() {
        let mock_db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<DreamEntryModel>::new()])
            .into_connection();

        let repository = DreamEntryRepositoryPostgres::new(Arc::new(mock_db));

        let changes = DreamEntryUpdate {
            title: "Flying".to_string(),
            abstract_text: "".to_string(),
            original_dream: "".to_string(),
            rewritten_dream: "".to_string(),
            times: 1,
        };

        let result = repository.update(7, 42, changes).await;

        assert!(matches!(
            result.unwrap_err(),
            DreamEntryRepositoryError::EntryNotFound
        ));
    }

    #[tokio::test]
    async fn test_delete_entry_returns_deleted_row() {
        let entry = mock_entry_model(1, 7);

        let mock_db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![entry.clone()]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repository = DreamEntryRepositoryPostgres::new(Arc::new(mock_db));

        let result = repository.delete(7, 1).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().id, entry.id);
    }

    #[tokio::test]
    async fn test_delete_entry_not_found() {
        let mock_db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<DreamEntryModel>::new()])
            .into_connection();

        let repository = DreamEntryRepositoryPostgres::new(Arc::new(mock_db));

        let result = repository.delete(7, 42).await;

        assert!(matches!(
            result.unwrap_err(),
            DreamEntryRepositoryError::EntryNotFound
        ));
    }

    #[tokio::test]
    async fn test_owning_user_resolves_parent_row() {
        let entry = mock_entry_model(1, 7);

        let mock_db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_user_model(7)]])
            .into_connection();

        let repository = DreamEntryRepositoryPostgres::new(Arc::new(mock_db));

        let result = repository.owning_user(&entry).await;

        assert!(result.is_ok());
        let user = result.unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.email, "test@example.com");
    }
}
