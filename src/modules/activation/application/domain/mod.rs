pub mod entities;

pub use entities::{is_expired, OtpCode, OTP_DIGITS, OTP_TTL_SECONDS};
