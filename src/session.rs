use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use udb_shared::Session;
use udb_user::Auth;

#[derive(Serialize, Deserialize)]
struct StoredSession {
    token: String,
}

/// Keeps the signed-in session token between CLI invocations.
#[derive(Clone, Debug)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn save(&self, session: &Session) -> anyhow::Result<()> {
        let data = serde_json::to_string(&StoredSession {
            token: session.token.to_owned(),
        })?;
        std::fs::write(&self.path, data)?;

        Ok(())
    }

    pub fn token(&self) -> anyhow::Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let data = std::fs::read_to_string(&self.path)?;
        let Ok(stored) = serde_json::from_str::<StoredSession>(&data) else {
            tracing::warn!(path = %self.path.display(), "ignoring unreadable session file");
            return Ok(None);
        };

        Ok(Some(stored.token))
    }

    /// Rehydrates the session; a token the auth service no longer accepts
    /// removes the file.
    pub async fn load(&self, auth: &dyn Auth) -> anyhow::Result<Option<Session>> {
        let Some(token) = self.token()? else {
            return Ok(None);
        };

        let session = auth.current_user(&token).await?;

        if session.is_none() {
            self.clear()?;
        }

        Ok(session)
    }

    pub fn clear(&self) -> anyhow::Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use temp_dir::TempDir;

    #[test]
    fn test_save_token_clear() {
        let dir = TempDir::new().unwrap();
        let file = SessionFile::new(dir.child("session.json"));

        assert_eq!(file.token().unwrap(), None);

        file.save(&Session {
            user_id: "u".to_string(),
            email: "a@b.com".to_string(),
            access_id: "x".to_string(),
            token: "tok".to_string(),
        })
        .unwrap();
        assert_eq!(file.token().unwrap().as_deref(), Some("tok"));

        file.clear().unwrap();
        assert_eq!(file.token().unwrap(), None);
        file.clear().unwrap();
    }

    #[test]
    fn test_unreadable_file_is_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.child("session.json");
        std::fs::write(&path, "not json").unwrap();

        assert_eq!(SessionFile::new(path).token().unwrap(), None);
    }
}
