use async_trait::async_trait;

use super::user_query::{UserProfile, UserSummary};

/// Input DTO for inserting a user row. New rows never carry the admin role.
#[derive(Debug, Clone)]
pub struct NewUserData {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub is_verified: bool,
}

/// Full replacement of the editable columns. `password_hash: None` keeps the stored hash.
#[derive(Debug, Clone)]
pub struct UpdateUserData {
    pub name: String,
    pub email: String,
    pub img_url: Option<String>,
    pub password_hash: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: NewUserData) -> Result<UserProfile, UserRepositoryError>;

    async fn update_user(
        &self,
        user_id: i32,
        data: UpdateUserData,
    ) -> Result<UserSummary, UserRepositoryError>;

    async fn delete_user(&self, user_id: i32) -> Result<(), UserRepositoryError>;

    async fn mark_verified(&self, user_id: i32) -> Result<(), UserRepositoryError>;
}
