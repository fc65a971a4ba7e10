use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use udb_shared::Session;
use ulid::Ulid;
use validator::Validate;

use crate::{Credentials, repository};

impl super::Command {
    #[tracing::instrument(skip_all, fields(email = %input.email))]
    pub async fn register(&self, input: Credentials) -> udb_shared::Result<Session> {
        input.validate()?;

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2
            .hash_password(input.password.as_bytes(), &salt)?
            .to_string();

        if repository::find(
            &self.read_db,
            repository::FindType::Email(input.email.to_owned()),
        )
        .await?
        .is_some()
        {
            udb_shared::bail!("Email already exists");
        }

        let id = Ulid::new().to_string();

        repository::create(
            &self.write_db,
            id.to_owned(),
            input.email.to_owned(),
            Some(password_hash),
        )
        .await?;

        tracing::info!(user_id = %id, "user registered");

        self.open_session(id, input.email).await
    }
}
