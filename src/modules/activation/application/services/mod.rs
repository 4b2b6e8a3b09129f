mod check_otp_service;
mod send_otp_service;

#[cfg(test)]
mod test_support;

pub use check_otp_service::CheckOtpService;
pub use send_otp_service::SendOtpService;
