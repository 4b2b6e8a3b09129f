// application/ports/outgoing/user_query.rs
use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::pagination::PageRequest;

/// Public listing/detail shape
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UserSummary {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub img_url: Option<String>,
}

/// Profile of the signed-in user, including role and activation state
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UserProfile {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub img_url: Option<String>,
    pub is_admin: bool,
    pub is_verified: bool,
}

/// What login needs; never leaves the application layer
#[derive(Debug, Clone, PartialEq)]
pub struct UserCredentials {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub is_verified: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserListFilter {
    /// Case-insensitive substring matched against name or email
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, UserQueryError>;

    async fn find_profile(&self, user_id: i32) -> Result<Option<UserProfile>, UserQueryError>;

    async fn find_id_by_email(&self, email: &str) -> Result<Option<i32>, UserQueryError>;

    async fn list_users(
        &self,
        filter: &UserListFilter,
        page: PageRequest,
    ) -> Result<Vec<UserSummary>, UserQueryError>;
}
