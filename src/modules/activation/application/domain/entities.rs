use chrono::{DateTime, Utc};
use subtle::ConstantTimeEq;

pub const OTP_DIGITS: usize = 6;
pub const OTP_TTL_SECONDS: i64 = 120;

/// Six-digit numeric code, leading zeros kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpCode(String);

impl OtpCode {
    pub fn from_number(n: u32) -> Self {
        Self(format!("{:0width$}", n % 1_000_000, width = OTP_DIGITS))
    }

    pub fn parse(raw: &str) -> Option<Self> {
        if raw.len() == OTP_DIGITS && raw.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self(raw.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Constant-time comparison against a submitted candidate.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.as_bytes().ct_eq(candidate.as_bytes()).into()
    }
}

/// A code stays valid through `expires_at` itself.
pub fn is_expired(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now > expires_at
}
