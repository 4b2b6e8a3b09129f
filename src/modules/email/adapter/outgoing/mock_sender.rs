use crate::email::application::ports::outgoing::{EmailError, EmailSender};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Records every message; optionally fails every send.
#[derive(Clone, Default)]
pub struct MockEmailSender {
    sent_emails: Arc<Mutex<Vec<(String, String, String)>>>,
    fail_with: Option<EmailError>,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(err: EmailError) -> Self {
        Self {
            sent_emails: Arc::default(),
            fail_with: Some(err),
        }
    }

    pub fn get_sent_emails(&self) -> Vec<(String, String, String)> {
        self.sent_emails.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailError> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.sent_emails.lock().unwrap().push((
            to.to_string(),
            subject.to_string(),
            body.to_string(),
        ));
        Ok(())
    }
}
