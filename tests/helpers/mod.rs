use std::{
    path::Path,
    str::FromStr,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use udb_events::{App, session::SessionFile};
use udb_user::{Mailer, ResetMail};

pub const SECRET: &str = "test-secret-key-at-least-32-characters-long";
pub const TIMEZONE: &str = "America/El_Salvador";

#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<ResetMail>>,
}

#[allow(dead_code)]
impl RecordingMailer {
    pub fn last(&self) -> Option<ResetMail> {
        self.sent.lock().ok()?.last().cloned()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send_password_reset(&self, mail: &ResetMail) -> anyhow::Result<()> {
        self.sent
            .lock()
            .map_err(|e| anyhow::anyhow!("{e}"))?
            .push(mail.clone());

        Ok(())
    }
}

pub async fn setup_test_state(path: &Path) -> anyhow::Result<udb_shared::State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    udb_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;

    Ok(udb_shared::State::new(pool))
}

/// App wired on a fresh database inside `dir`, with a mailer that records
/// instead of sending.
pub async fn setup_app(dir: &Path) -> anyhow::Result<(App, Arc<RecordingMailer>)> {
    let state = setup_test_state(&dir.join("db.sqlite3")).await?;
    let mailer = Arc::new(RecordingMailer::default());

    let auth = udb_user::Command::new(state.clone(), SECRET)
        .with_mailer(mailer.clone())
        .with_reset_base_url("http://localhost:3000");

    let app = App {
        auth: Arc::new(auth),
        store: Arc::new(udb_event::Store::new(state)),
        session_file: SessionFile::new(dir.join("session.json")),
        timezone: TIMEZONE.to_owned(),
    };

    Ok((app, mailer))
}
