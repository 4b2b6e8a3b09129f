use async_trait::async_trait;

use crate::auth::application::ports::outgoing::{UserProfile, UserSummary};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetUserError {
    #[error("user not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

/// Public detail of any user
#[async_trait]
pub trait GetUserUseCase: Send + Sync {
    async fn execute(&self, user_id: i32) -> Result<UserSummary, GetUserError>;
}

/// Profile of the caller, re-read from the store on every request
#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: i32) -> Result<UserProfile, GetUserError>;
}
