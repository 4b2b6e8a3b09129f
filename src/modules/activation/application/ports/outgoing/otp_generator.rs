use crate::activation::application::domain::OtpCode;

pub trait OtpGenerator: Send + Sync {
    fn generate(&self) -> OtpCode;
}
