use async_trait::async_trait;
use chrono::Duration;
use std::sync::Arc;
use tracing::{error, info};

use crate::activation::application::domain::OTP_TTL_SECONDS;
use crate::activation::application::ports::{
    incoming::use_cases::{SendOtpCommand, SendOtpError, SendOtpUseCase},
    outgoing::{Clock, OtpGenerator, OtpRecord, OtpRepository},
};
use crate::auth::application::ports::outgoing::UserQuery;
use crate::email::application::ports::outgoing::EmailSender;

pub const OTP_MAIL_SUBJECT: &str = "OTP Verification";

pub struct SendOtpService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: OtpRepository + Send + Sync,
{
    users: Q,
    otps: R,
    generator: Arc<dyn OtpGenerator>,
    mailer: Arc<dyn EmailSender>,
    clock: Arc<dyn Clock>,
}

impl<Q, R> SendOtpService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: OtpRepository + Send + Sync,
{
    pub fn new(
        users: Q,
        otps: R,
        generator: Arc<dyn OtpGenerator>,
        mailer: Arc<dyn EmailSender>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            otps,
            generator,
            mailer,
            clock,
        }
    }
}

#[async_trait]
impl<Q, R> SendOtpUseCase for SendOtpService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: OtpRepository + Send + Sync,
{
    async fn execute(&self, command: SendOtpCommand) -> Result<(), SendOtpError> {
        let email = command.email().as_str();

        let user_id = self
            .users
            .find_id_by_email(email)
            .await
            .map_err(|e| SendOtpError::QueryError(e.to_string()))?
            .ok_or(SendOtpError::UserNotFound)?;

        let code = self.generator.generate();
        let expires_at = self.clock.now() + Duration::seconds(OTP_TTL_SECONDS);

        self.otps
            .upsert_otp(OtpRecord {
                user_id,
                otp_code: code.as_str().to_string(),
                expires_at,
            })
            .await
            .map_err(|e| SendOtpError::StoreFailed(e.to_string()))?;

        // No rollback: the stored code stays valid if delivery fails
        let body = format!("Your OTP code is: {}", code.as_str());
        self.mailer
            .send_email(email, OTP_MAIL_SUBJECT, &body)
            .await
            .map_err(|e| {
                error!(user_id, error = %e, "OTP stored but email delivery failed");
                SendOtpError::MailFailed(e.to_string())
            })?;

        info!(user_id, %expires_at, "OTP issued");
        Ok(())
    }
}
