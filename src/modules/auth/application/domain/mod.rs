pub mod entities;

pub use entities::{password_long_enough, Email, MIN_PASSWORD_LEN};
