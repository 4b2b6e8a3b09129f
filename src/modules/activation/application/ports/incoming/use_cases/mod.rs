mod check_otp;
mod send_otp;

pub use check_otp::{CheckOtpCommand, CheckOtpCommandError, CheckOtpError, CheckOtpUseCase};
pub use send_otp::{SendOtpCommand, SendOtpCommandError, SendOtpError, SendOtpUseCase};
