use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// The single pending code of a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpRecord {
    pub user_id: i32,
    pub otp_code: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OtpRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait OtpRepository: Send + Sync {
    /// Inserts or overwrites the user's code.
    async fn upsert_otp(&self, record: OtpRecord) -> Result<(), OtpRepositoryError>;

    async fn find_otp(&self, user_id: i32) -> Result<Option<OtpRecord>, OtpRepositoryError>;
}
