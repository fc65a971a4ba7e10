use std::{collections::HashMap, ops::Deref, sync::Arc};

use async_trait::async_trait;
use udb_shared::Session;
use ulid::Ulid;

use crate::{
    Auth, Credentials, FederatedCredential, LogMailer, Mailer, Provider, ProviderKey, ResetInput,
    repository, token,
};

mod federated;
mod login;
mod password;
mod register;

pub use password::RESET_TOKEN_LIFETIME_MINUTES;

const DEFAULT_EXPIRATION_DAYS: u64 = 7;

/// SQLite backed [`Auth`] implementation.
#[derive(Clone)]
pub struct Command {
    state: udb_shared::State,
    secret: String,
    lifetime_seconds: u64,
    providers: HashMap<Provider, ProviderKey>,
    mailer: Arc<dyn Mailer>,
    reset_base_url: String,
}

impl Deref for Command {
    type Target = udb_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Command {
    pub fn new(state: udb_shared::State, secret: impl Into<String>) -> Self {
        Self {
            state,
            secret: secret.into(),
            lifetime_seconds: DEFAULT_EXPIRATION_DAYS * 24 * 60 * 60,
            providers: HashMap::new(),
            mailer: Arc::new(LogMailer),
            reset_base_url: "http://localhost:3000".to_owned(),
        }
    }

    pub fn with_expiration_days(mut self, days: u64) -> Self {
        self.lifetime_seconds = days * 24 * 60 * 60;
        self
    }

    pub fn with_provider(mut self, provider: Provider, key: ProviderKey) -> Self {
        self.providers.insert(provider, key);
        self
    }

    pub fn with_mailer(mut self, mailer: Arc<dyn Mailer>) -> Self {
        self.mailer = mailer;
        self
    }

    pub fn with_reset_base_url(mut self, url: impl Into<String>) -> Self {
        self.reset_base_url = url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Records a fresh access id for the user and signs a token bound to it.
    async fn open_session(
        &self,
        user_id: impl Into<String>,
        email: impl Into<String>,
    ) -> udb_shared::Result<Session> {
        let user_id = user_id.into();
        let email = email.into();
        let access_id = Ulid::new().to_string();

        repository::create_session(&self.write_db, &access_id, &user_id).await?;

        let token = token::generate_token(
            &user_id,
            &email,
            &access_id,
            &self.secret,
            self.lifetime_seconds,
        )?;

        tracing::info!(user_id = %user_id, access_id = %access_id, "session opened");

        Ok(Session {
            user_id,
            email,
            access_id,
            token,
        })
    }
}

#[async_trait]
impl Auth for Command {
    async fn sign_in(&self, credentials: Credentials) -> udb_shared::Result<Session> {
        self.login(credentials).await
    }

    async fn create_account(&self, credentials: Credentials) -> udb_shared::Result<Session> {
        self.register(credentials).await
    }

    async fn sign_in_with_credential(
        &self,
        credential: FederatedCredential,
    ) -> udb_shared::Result<Session> {
        self.login_with(credential).await
    }

    async fn send_password_reset_email(&self, email: &str) -> udb_shared::Result<()> {
        self.request_password_reset(email).await
    }

    async fn reset_password(&self, input: ResetInput) -> udb_shared::Result<()> {
        self.reset(input).await
    }

    async fn sign_out(&self, session: &Session) -> udb_shared::Result<()> {
        self.logout(session).await
    }

    async fn current_user(&self, token: &str) -> udb_shared::Result<Option<Session>> {
        self.authenticate(token).await
    }
}
