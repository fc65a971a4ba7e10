use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use time::{Duration, OffsetDateTime};
use ulid::Ulid;
use validator::Validate;

use crate::{ResetInput, ResetMail, is_valid_email, repository};

pub const RESET_TOKEN_LIFETIME_MINUTES: i64 = 15;

impl super::Command {
    /// Issues a single use reset token and mails it. Unknown addresses are
    /// accepted silently.
    #[tracing::instrument(skip(self))]
    pub async fn request_password_reset(&self, email: &str) -> udb_shared::Result<()> {
        if !is_valid_email(email) {
            udb_shared::invalid!("Invalid email address");
        }

        let Some(user_row) = repository::find(
            &self.read_db,
            repository::FindType::Email(email.to_owned()),
        )
        .await?
        else {
            tracing::debug!("password reset requested for unknown email");
            return Ok(());
        };

        let expire_at = (OffsetDateTime::now_utc()
            + Duration::minutes(RESET_TOKEN_LIFETIME_MINUTES))
        .unix_timestamp();

        let row = repository::ResetRow {
            id: Ulid::new().to_string(),
            user_id: user_row.id,
            email: user_row.email,
            expire_at,
            completed: false,
        };

        repository::create_reset(&self.write_db, &row).await?;

        let mail = ResetMail {
            email: row.email.to_owned(),
            token: row.id.to_owned(),
            link: format!("{}/reset-password/{}", self.reset_base_url, row.id),
        };

        self.mailer.send_password_reset(&mail).await?;

        tracing::info!(user_id = %row.user_id, "password reset requested");

        Ok(())
    }

    #[tracing::instrument(skip_all)]
    pub async fn reset(&self, input: ResetInput) -> udb_shared::Result<()> {
        input.validate()?;

        let Some(row) = repository::find_reset(&self.read_db, &input.token).await? else {
            udb_shared::not_found!("password reset");
        };

        if row.completed {
            udb_shared::bail!("has already been reset");
        }

        if row.expire_at < udb_shared::now_timestamp() {
            udb_shared::bail!("token expired");
        }

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2
            .hash_password(input.password.as_bytes(), &salt)?
            .to_string();

        repository::update_password(&self.write_db, row.user_id.to_owned(), password_hash).await?;
        repository::complete_reset(&self.write_db, &row.id).await?;
        repository::delete_user_sessions(&self.write_db, &row.user_id).await?;

        tracing::info!(user_id = %row.user_id, "password reset");

        Ok(())
    }
}
