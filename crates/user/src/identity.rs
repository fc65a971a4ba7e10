use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

/// Verification material for one federated provider's identity tokens.
///
/// A shared `secret` selects HS256; otherwise `public_key_pem` selects RS256.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderKey {
    pub issuer: String,
    pub audience: String,
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default)]
    pub public_key_pem: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdentityClaims {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: Option<bool>,
    pub iss: String,
    pub exp: u64,
}

impl IdentityClaims {
    /// Email the provider vouches for; unverified addresses are ignored.
    pub fn verified_email(&self) -> Option<&str> {
        match (self.email.as_deref(), self.email_verified) {
            (Some(email), Some(true)) if !email.is_empty() => Some(email),
            _ => None,
        }
    }
}

impl ProviderKey {
    pub fn verify(&self, id_token: &str) -> udb_shared::Result<IdentityClaims> {
        let (key, algorithm) = match (&self.secret, &self.public_key_pem) {
            (Some(secret), _) => (DecodingKey::from_secret(secret.as_bytes()), Algorithm::HS256),
            (None, Some(pem)) => (
                DecodingKey::from_rsa_pem(pem.as_bytes())
                    .map_err(|e| udb_shared::Error::Invalid(format!("provider key: {e}")))?,
                Algorithm::RS256,
            ),
            (None, None) => udb_shared::invalid!("provider {} has no key", self.issuer),
        };

        let mut validation = Validation::new(algorithm);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        let data = decode::<IdentityClaims>(id_token, &key, &validation)
            .map_err(|e| udb_shared::Error::Remote(format!("invalid identity token: {e}")))?;

        Ok(data.claims)
    }
}
