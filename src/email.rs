//! Password reset delivery over SMTP using lettre

use std::sync::Arc;

use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport, message::header::ContentType,
    transport::smtp::authentication::Credentials,
};
use udb_user::{LogMailer, Mailer, ResetMail};

use crate::config::EmailConfig;

/// SMTP backed [`Mailer`]
#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
    from: String,
}

impl EmailService {
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection"
            );
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());
            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            mailer,
            from: format!("{} <{}>", config.from_name, config.from_email),
        })
    }

    fn build_message(&self, mail: &ResetMail) -> anyhow::Result<Message> {
        Ok(Message::builder()
            .from(self.from.parse()?)
            .to(mail.email.parse()?)
            .subject(mail.subject())
            .header(ContentType::TEXT_PLAIN)
            .body(mail.body()?)?)
    }
}

#[async_trait]
impl Mailer for EmailService {
    async fn send_password_reset(&self, mail: &ResetMail) -> anyhow::Result<()> {
        let message = self.build_message(mail)?;
        let mailer = self.mailer.clone();

        tokio::task::spawn_blocking(move || mailer.send(&message)).await??;

        tracing::info!(email = %mail.email, "Password reset email sent");

        Ok(())
    }
}

/// SMTP delivery when enabled, the logging mailer otherwise
pub fn mailer_from_config(config: &EmailConfig) -> anyhow::Result<Arc<dyn Mailer>> {
    if config.enabled {
        Ok(Arc::new(EmailService::new(config)?))
    } else {
        Ok(Arc::new(LogMailer))
    }
}
