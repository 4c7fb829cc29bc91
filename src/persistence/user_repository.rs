use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use entity::users::{ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Error)]
pub enum UserRepositoryError {
    #[error("email is already registered")]
    EmailTaken,
    #[error("user not found")]
    UserNotFound,
    #[error("database error: {0}")]
    Database(String),
}

#[async_trait]
pub trait UserRepository {
    async fn create(&self, user: NewUser) -> Result<UserModel, UserRepositoryError>;
    async fn find_by_id(&self, user_id: i32) -> Result<UserModel, UserRepositoryError>;
    /// Removing a user also removes every dependent row (tokens, chat
    /// messages, summaries, dream entries) through the cascade FKs.
    async fn delete(&self, user_id: i32) -> Result<(), UserRepositoryError>;
}

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create(&self, user: NewUser) -> Result<UserModel, UserRepositoryError> {
        // Profile columns stay unset until the user fills them in; the
        // timestamps come from the schema defaults.
        let active_user = UserActiveModel {
            id: NotSet,
            username: Set(user.username),
            email: Set(user.email),
            password: Set(user.password),
            header_image_url: NotSet,
            profile_image_url: NotSet,
            name: NotSet,
            surname: NotSet,
            date_of_birth: NotSet,
            phone_number: NotSet,
            gender: NotSet,
            region: NotSet,
            education: NotSet,
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("23505")
                || err_str.contains("duplicate key")
                || err_str.contains("unique constraint")
            {
                return UserRepositoryError::EmailTaken;
            }
            UserRepositoryError::Database(e.to_string())
        })?;

        Ok(inserted)
    }

    async fn find_by_id(&self, user_id: i32) -> Result<UserModel, UserRepositoryError> {
        UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::Database(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)
    }

    async fn delete(&self, user_id: i32) -> Result<(), UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::Database(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let active_user: UserActiveModel = user.into();
        active_user
            .delete(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::Database(e.to_string()))?;

        Ok(())
    }
}
