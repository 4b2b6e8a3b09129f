use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::activation::application::domain::{is_expired, OtpCode};
use crate::activation::application::ports::{
    incoming::use_cases::{CheckOtpCommand, CheckOtpError, CheckOtpUseCase},
    outgoing::{Clock, OtpRepository},
};
use crate::auth::application::ports::outgoing::{UserQuery, UserRepository, UserRepositoryError};

pub struct CheckOtpService<Q, U, R>
where
    Q: UserQuery + Send + Sync,
    U: UserRepository + Send + Sync,
    R: OtpRepository + Send + Sync,
{
    users: Q,
    user_repository: U,
    otps: R,
    clock: Arc<dyn Clock>,
}

impl<Q, U, R> CheckOtpService<Q, U, R>
where
    Q: UserQuery + Send + Sync,
    U: UserRepository + Send + Sync,
    R: OtpRepository + Send + Sync,
{
    pub fn new(users: Q, user_repository: U, otps: R, clock: Arc<dyn Clock>) -> Self {
        Self {
            users,
            user_repository,
            otps,
            clock,
        }
    }
}

#[async_trait]
impl<Q, U, R> CheckOtpUseCase for CheckOtpService<Q, U, R>
where
    Q: UserQuery + Send + Sync,
    U: UserRepository + Send + Sync,
    R: OtpRepository + Send + Sync,
{
    async fn execute(&self, command: CheckOtpCommand) -> Result<(), CheckOtpError> {
        let user_id = command.user_id();

        self.users
            .find_profile(user_id)
            .await
            .map_err(|e| CheckOtpError::QueryError(e.to_string()))?
            .ok_or(CheckOtpError::UserNotFound)?;

        let record = self
            .otps
            .find_otp(user_id)
            .await
            .map_err(|e| CheckOtpError::RepositoryError(e.to_string()))?
            .ok_or(CheckOtpError::OtpNotFound)?;

        // Expiry wins over a wrong candidate
        if is_expired(record.expires_at, self.clock.now()) {
            warn!(user_id, "Expired OTP submitted");
            return Err(CheckOtpError::OtpExpired);
        }

        let matches = OtpCode::parse(&record.otp_code)
            .map(|code| code.matches(command.otp()))
            .unwrap_or(false);
        if !matches {
            warn!(user_id, "OTP mismatch");
            return Err(CheckOtpError::OtpMismatch);
        }

        self.user_repository
            .mark_verified(user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => CheckOtpError::UserNotFound,
                other => CheckOtpError::RepositoryError(other.to_string()),
            })?;

        info!(user_id, "User verified through OTP");
        Ok(())
    }
}
