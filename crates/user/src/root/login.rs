use argon2::{Argon2, PasswordHash, PasswordVerifier};
use udb_shared::Session;
use validator::Validate;

use crate::{Credentials, repository, token};

impl super::Command {
    #[tracing::instrument(skip_all, fields(email = %input.email))]
    pub async fn login(&self, input: Credentials) -> udb_shared::Result<Session> {
        input.validate()?;

        let Some(user_row) =
            repository::find(&self.read_db, repository::FindType::Email(input.email)).await?
        else {
            udb_shared::bail!("Invalid email or password. Please try again.");
        };

        let Some(password) = user_row.password else {
            udb_shared::bail!("Invalid email or password. Please try again.");
        };

        let parsed_hash = PasswordHash::new(&password)?;
        let argon2 = Argon2::default();

        if argon2
            .verify_password(input.password.as_bytes(), &parsed_hash)
            .is_err()
        {
            udb_shared::bail!("Invalid email or password. Please try again.");
        }

        self.open_session(user_row.id, user_row.email).await
    }

    #[tracing::instrument(skip_all, fields(user_id = %session.user_id))]
    pub async fn logout(&self, session: &Session) -> udb_shared::Result<()> {
        repository::delete_session(&self.write_db, &session.access_id).await?;

        tracing::info!(access_id = %session.access_id, "session closed");

        Ok(())
    }

    /// Resolves a session token; expired, forged or signed-out tokens yield
    /// `None`.
    pub async fn authenticate(&self, token: &str) -> udb_shared::Result<Option<Session>> {
        let claims = match token::validate_token(token, &self.secret) {
            Ok(claims) => claims,
            Err(err) => {
                tracing::debug!(error = %err, "rejected session token");
                return Ok(None);
            }
        };

        if !repository::is_session_active(&self.read_db, &claims.jti, &claims.sub).await? {
            return Ok(None);
        }

        Ok(Some(Session {
            user_id: claims.sub,
            email: claims.email,
            access_id: claims.jti,
            token: token.to_owned(),
        }))
    }
}
