use std::sync::Arc;

use crate::activation::application::ports::incoming::use_cases::{CheckOtpUseCase, SendOtpUseCase};

#[derive(Clone)]
pub struct ActivationUseCases {
    pub send_otp: Arc<dyn SendOtpUseCase + Send + Sync>,
    pub check_otp: Arc<dyn CheckOtpUseCase + Send + Sync>,
}
