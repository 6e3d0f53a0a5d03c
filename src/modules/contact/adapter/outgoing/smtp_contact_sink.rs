use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{
    message::header::ContentType, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::modules::contact::application::ports::outgoing::{ContactSink, ContactSinkError};
use crate::modules::contact::domain::ContactMessage;

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

/// Forwards submissions to the site owner's inbox, with the visitor as
/// `Reply-To`.
pub struct SmtpContactSink {
    mailer: Box<dyn Mailer>,
    from_email: String,
    inbox: String,
}

impl SmtpContactSink {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str, inbox: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
            inbox: inbox.to_string(),
        }
    }

    pub fn new(
        smtp_server: &str,
        smtp_username: &str,
        smtp_password: &str,
        from_email: &str,
        inbox: &str,
    ) -> Result<Self, ContactSinkError> {
        let creds = Credentials::new(smtp_username.to_string(), smtp_password.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)
            .map_err(|e| ContactSinkError::Transport(e.to_string()))?
            .credentials(creds)
            .build();

        Ok(Self::new_with_mailer(Box::new(transport), from_email, inbox))
    }

    fn build_message(&self, message: &ContactMessage) -> Result<Message, ContactSinkError> {
        let reply_to = format!("{} <{}>", message.name(), message.email());

        Message::builder()
            .from(
                self.from_email
                    .parse()
                    .map_err(|e| ContactSinkError::InvalidAddress(format!("{:?}", e)))?,
            )
            .reply_to(
                reply_to
                    .parse()
                    .map_err(|e| ContactSinkError::InvalidAddress(format!("{:?}", e)))?,
            )
            .to(self
                .inbox
                .parse()
                .map_err(|e| ContactSinkError::InvalidAddress(format!("{:?}", e)))?)
            .subject(format!("Portfolio contact from {}", message.name()))
            .header(ContentType::TEXT_PLAIN)
            .body(format!(
                "From: {} <{}>\n\n{}",
                message.name(),
                message.email(),
                message.message()
            ))
            .map_err(|e| ContactSinkError::Transport(e.to_string()))
    }
}

#[async_trait]
impl ContactSink for SmtpContactSink {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), ContactSinkError> {
        let email = self.build_message(message)?;
        self.mailer
            .send(email)
            .await
            .map_err(ContactSinkError::Transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingMailer {
        sent: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, email: Message) -> Result<(), String> {
            let raw = String::from_utf8_lossy(&email.formatted()).to_string();
            self.sent.lock().unwrap().push(raw);
            Ok(())
        }
    }

    fn message() -> ContactMessage {
        ContactMessage::new("Ada Lovelace", "ada@example.com", "Let's talk engines.").unwrap()
    }

    #[tokio::test]
    async fn test_deliver_addresses_owner_and_replies_to_visitor() {
        let mailer = RecordingMailer::default();
        let sink = SmtpContactSink::new_with_mailer(
            Box::new(mailer.clone()),
            "site@example.com",
            "owner@example.com",
        );

        sink.deliver(&message()).await.unwrap();

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("To: owner@example.com"));
        assert!(sent[0].contains("Reply-To: "));
        assert!(sent[0].contains("<ada@example.com>"));
        assert!(sent[0].contains("Subject: Portfolio contact from Ada Lovelace"));
        assert!(sent[0].contains("Let's talk engines."));
    }

    #[tokio::test]
    async fn test_invalid_from_address_never_reaches_mailer() {
        struct PanicMailer;
        #[async_trait]
        impl Mailer for PanicMailer {
            async fn send(&self, _: Message) -> Result<(), String> {
                panic!("Should not reach mailer when the sender address is invalid");
            }
        }

        let sink =
            SmtpContactSink::new_with_mailer(Box::new(PanicMailer), "not-an-email", "owner@example.com");

        let res = sink.deliver(&message()).await;

        assert!(matches!(res, Err(ContactSinkError::InvalidAddress(_))));
    }

    #[tokio::test]
    async fn test_transport_error_is_reported() {
        struct FailingMailer;
        #[async_trait]
        impl Mailer for FailingMailer {
            async fn send(&self, _: Message) -> Result<(), String> {
                Err("421 service not available".to_string())
            }
        }

        let sink = SmtpContactSink::new_with_mailer(
            Box::new(FailingMailer),
            "site@example.com",
            "owner@example.com",
        );

        let res = sink.deliver(&message()).await;

        assert!(matches!(res, Err(ContactSinkError::Transport(msg)) if msg.contains("421")));
    }
}
