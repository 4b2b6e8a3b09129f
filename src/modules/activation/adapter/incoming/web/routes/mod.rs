mod check_otp;
mod send_otp;

pub use check_otp::*;
pub use send_otp::*;
