use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::json;
use temp_dir::TempDir;
use udb_shared::ErrorKind;
use udb_user::{Auth, Credentials, FederatedCredential, Provider, ProviderKey};

mod helpers;

const GOOGLE_SECRET: &str = "google-test-secret-at-least-32-characters";
const GOOGLE_ISSUER: &str = "https://accounts.google.com";

fn google_key() -> ProviderKey {
    ProviderKey {
        issuer: GOOGLE_ISSUER.to_owned(),
        audience: "udb-events".to_owned(),
        secret: Some(GOOGLE_SECRET.to_owned()),
        public_key_pem: None,
    }
}

fn google_token(sub: &str, email: Option<&str>) -> anyhow::Result<FederatedCredential> {
    google_token_verified(sub, email, Some(true))
}

fn google_token_verified(
    sub: &str,
    email: Option<&str>,
    email_verified: Option<bool>,
) -> anyhow::Result<FederatedCredential> {
    let claims = json!({
        "sub": sub,
        "email": email,
        "email_verified": email_verified,
        "iss": GOOGLE_ISSUER,
        "aud": "udb-events",
        "exp": udb_shared::now_timestamp() + 600,
    });

    Ok(FederatedCredential {
        provider: Provider::Google,
        id_token: encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(GOOGLE_SECRET.as_bytes()),
        )?,
    })
}

#[tokio::test]
async fn test_federated_creates_then_reuses_account() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (cmd, _) = helpers::setup_command(dir.child("db.sqlite3")).await?;
    let cmd = cmd.with_provider(Provider::Google, google_key());

    let first = cmd
        .sign_in_with_credential(google_token("g-1", Some("albert@udb.localhost"))?)
        .await?;
    assert_eq!(first.email, "albert@udb.localhost");

    let second = cmd
        .sign_in_with_credential(google_token("g-1", Some("albert@udb.localhost"))?)
        .await?;
    assert_eq!(second.user_id, first.user_id);

    // password-less accounts cannot use the email form
    let err = cmd
        .sign_in(Credentials::new("albert@udb.localhost", "my_password"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RemoteCallFailure);

    Ok(())
}

#[tokio::test]
async fn test_federated_links_existing_email() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (cmd, _) = helpers::setup_command(dir.child("db.sqlite3")).await?;
    let cmd = cmd.with_provider(Provider::Google, google_key());

    let user = helpers::create_user(&cmd, "john.doe").await?;

    let session = cmd
        .sign_in_with_credential(google_token("g-2", Some("john.doe@udb.localhost"))?)
        .await?;
    assert_eq!(session.user_id, user.user_id);

    Ok(())
}

#[tokio::test]
async fn test_federated_unverified_email_cannot_link_or_register() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (cmd, _) = helpers::setup_command(dir.child("db.sqlite3")).await?;
    let cmd = cmd.with_provider(Provider::Google, google_key());

    let user = helpers::create_user(&cmd, "john.doe").await?;

    for verified in [Some(false), None] {
        let err = cmd
            .sign_in_with_credential(google_token_verified(
                "g-other",
                Some("john.doe@udb.localhost"),
                verified,
            )?)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Google account email is not verified");
    }

    let err = cmd
        .sign_in_with_credential(google_token_verified(
            "g-new",
            Some("newcomer@udb.localhost"),
            Some(false),
        )?)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RemoteCallFailure);

    // nothing was linked by the unverified attempts
    let session = cmd
        .sign_in_with_credential(google_token("g-other", Some("john.doe@udb.localhost"))?)
        .await?;
    assert_eq!(session.user_id, user.user_id);

    let err = cmd
        .sign_in(Credentials::new("newcomer@udb.localhost", "my_password"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RemoteCallFailure);

    Ok(())
}

#[tokio::test]
async fn test_federated_failures() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (cmd, _) = helpers::setup_command(dir.child("db.sqlite3")).await?;

    let err = cmd
        .sign_in_with_credential(google_token("g-3", Some("a@b.com"))?)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Google sign-in is not configured");

    let cmd = cmd.with_provider(Provider::Google, google_key());

    let err = cmd
        .sign_in_with_credential(FederatedCredential {
            provider: Provider::Google,
            id_token: "forged".to_owned(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RemoteCallFailure);

    let err = cmd
        .sign_in_with_credential(google_token("g-4", None)?)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Google account has no email address");

    let err = cmd
        .sign_in_with_credential(FederatedCredential {
            provider: Provider::GitHub,
            id_token: google_token("g-5", Some("a@b.com"))?.id_token,
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "GitHub sign-in is not configured");

    Ok(())
}
