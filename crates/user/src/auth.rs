use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use udb_shared::Session;
use validator::{Validate, ValidateEmail};

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Validate, Clone, Debug)]
pub struct Credentials {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

#[derive(
    Display,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Google,
    GitHub,
}

impl Provider {
    /// Human facing name used in screen messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::GitHub => "GitHub",
        }
    }
}

/// Identity assertion issued by a federated provider.
#[derive(Clone, Debug)]
pub struct FederatedCredential {
    pub provider: Provider,
    pub id_token: String,
}

#[derive(Validate, Clone, Debug)]
pub struct ResetInput {
    #[validate(length(min = 1))]
    pub token: String,
    #[validate(length(min = 6))]
    pub password: String,
}

/// Authentication service collaborator.
///
/// Every operation that establishes an identity returns the [`Session`] the
/// screens carry around; `current_user` rehydrates one from its token.
#[async_trait]
pub trait Auth: Send + Sync {
    async fn sign_in(&self, credentials: Credentials) -> udb_shared::Result<Session>;

    async fn create_account(&self, credentials: Credentials) -> udb_shared::Result<Session>;

    async fn sign_in_with_credential(
        &self,
        credential: FederatedCredential,
    ) -> udb_shared::Result<Session>;

    async fn send_password_reset_email(&self, email: &str) -> udb_shared::Result<()>;

    async fn reset_password(&self, input: ResetInput) -> udb_shared::Result<()>;

    async fn sign_out(&self, session: &Session) -> udb_shared::Result<()>;

    async fn current_user(&self, token: &str) -> udb_shared::Result<Option<Session>>;
}

pub fn is_valid_email(email: &str) -> bool {
    email.validate_email()
}

pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("john.doe@udb.localhost"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@"));
    }

    #[test]
    fn test_password_validation() {
        assert!(is_valid_password("secret"));
        assert!(is_valid_password("a longer password"));
        assert!(!is_valid_password("short"));
        assert!(!is_valid_password(""));
    }

    #[test]
    fn test_credentials_validate() {
        assert!(Credentials::new("a@b.com", "secret").validate().is_ok());
        assert!(Credentials::new("not-an-email", "secret").validate().is_err());
        assert!(Credentials::new("a@b.com", "12345").validate().is_err());
    }

    #[test]
    fn test_provider_names() {
        assert_eq!(Provider::Google.to_string(), "google");
        assert_eq!(Provider::GitHub.to_string(), "github");
        assert_eq!(Provider::from_str("github").ok(), Some(Provider::GitHub));
        assert_eq!(Provider::GitHub.label(), "GitHub");
        assert!(Provider::from_str("facebook").is_err());
    }
}
