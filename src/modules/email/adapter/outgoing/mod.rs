mod smtp_sender;

#[cfg(test)]
mod mock_sender;

pub use smtp_sender::{Mailer, SmtpEmailSender};

#[cfg(test)]
pub use mock_sender::MockEmailSender;
