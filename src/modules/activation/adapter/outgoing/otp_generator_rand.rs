use rand::{rngs::OsRng, Rng};

use crate::activation::application::domain::OtpCode;
use crate::activation::application::ports::outgoing::OtpGenerator;

/// Uniform six-digit codes from the operating system RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRngOtpGenerator;

impl OtpGenerator for OsRngOtpGenerator {
    fn generate(&self) -> OtpCode {
        OtpCode::from_number(OsRng.gen_range(0..1_000_000))
    }
}
