use askama::Template;
use async_trait::async_trait;

use crate::RESET_TOKEN_LIFETIME_MINUTES;

#[derive(Template)]
#[template(path = "reset-password.txt")]
struct ResetPasswordPlainTemplate<'a> {
    email: &'a str,
    token: &'a str,
    link: &'a str,
    minutes: i64,
}

/// Password reset notification handed to a [`Mailer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetMail {
    pub email: String,
    pub token: String,
    pub link: String,
}

impl ResetMail {
    pub fn subject(&self) -> &'static str {
        "Reset your password"
    }

    pub fn body(&self) -> askama::Result<String> {
        ResetPasswordPlainTemplate {
            email: &self.email,
            token: &self.token,
            link: &self.link,
            minutes: RESET_TOKEN_LIFETIME_MINUTES,
        }
        .render()
    }
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_password_reset(&self, mail: &ResetMail) -> anyhow::Result<()>;
}

/// Mailer that only records the reset link in the logs, at `warn` so the
/// default filter keeps it visible.
#[derive(Debug, Clone, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send_password_reset(&self, mail: &ResetMail) -> anyhow::Result<()> {
        tracing::warn!(
            email = %mail.email,
            link = %mail.link,
            "Email delivery disabled, password reset link logged"
        );

        Ok(())
    }
}
