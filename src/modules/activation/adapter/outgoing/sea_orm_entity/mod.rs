pub mod user_otps;
