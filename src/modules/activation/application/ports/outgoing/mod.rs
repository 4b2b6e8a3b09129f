mod clock;
mod otp_generator;
mod otp_repository;

pub use clock::{Clock, SystemClock};
pub use otp_generator::OtpGenerator;
pub use otp_repository::{OtpRecord, OtpRepository, OtpRepositoryError};
