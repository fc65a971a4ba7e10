use udb_shared::Session;
use ulid::Ulid;

use crate::{FederatedCredential, repository};

impl super::Command {
    /// Signs in through a federated identity, linking it to the account with
    /// the same email or creating a password-less account on first use.
    /// Linking and account creation both require a provider-verified email.
    #[tracing::instrument(skip_all, fields(provider = %input.provider))]
    pub async fn login_with(&self, input: FederatedCredential) -> udb_shared::Result<Session> {
        let Some(key) = self.providers.get(&input.provider) else {
            udb_shared::bail!("{} sign-in is not configured", input.provider.label());
        };

        let claims = key.verify(&input.id_token)?;
        let provider = input.provider.as_ref();

        if let Some(user_id) =
            repository::find_identity(&self.read_db, provider, &claims.sub).await?
        {
            let Some(user_row) =
                repository::find(&self.read_db, repository::FindType::Id(user_id)).await?
            else {
                udb_shared::not_found!("user linked to {} identity", provider);
            };

            return self.open_session(user_row.id, user_row.email).await;
        }

        if claims.email.as_deref().is_none_or(str::is_empty) {
            udb_shared::bail!("{} account has no email address", input.provider.label());
        }

        let Some(email) = claims.verified_email().map(str::to_owned) else {
            tracing::warn!(subject = %claims.sub, "federated email not verified");
            udb_shared::bail!("{} account email is not verified", input.provider.label());
        };

        let user_id = match repository::find(
            &self.read_db,
            repository::FindType::Email(email.to_owned()),
        )
        .await?
        {
            Some(user_row) => user_row.id,
            None => {
                let id = Ulid::new().to_string();
                repository::create(&self.write_db, id.to_owned(), email.to_owned(), None).await?;

                tracing::info!(user_id = %id, "user registered from federated identity");

                id
            }
        };

        repository::create_identity(&self.write_db, provider, &claims.sub, &user_id).await?;

        tracing::info!(user_id = %user_id, "federated identity linked");

        self.open_session(user_id, email).await
    }
}
