use std::{
    path::PathBuf,
    str::FromStr,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use udb_user::{Auth, Credentials, Mailer, ResetMail};

pub const SECRET: &str = "test-secret-key-at-least-32-characters-long";

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<udb_shared::State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    udb_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;

    Ok(udb_shared::State::new(pool))
}

#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<ResetMail>>,
}

#[allow(dead_code)]
impl RecordingMailer {
    pub fn last(&self) -> Option<ResetMail> {
        self.sent.lock().ok()?.last().cloned()
    }

    pub fn count(&self) -> usize {
        self.sent.lock().map(|sent| sent.len()).unwrap_or_default()
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

#[allow(dead_code)]
pub async fn setup_command(path: PathBuf) -> anyhow::Result<(udb_user::Command, Arc<RecordingMailer>)> {
    let state = setup_test_state(path).await?;
    let mailer = Arc::new(RecordingMailer::default());
    let cmd = udb_user::Command::new(state, SECRET)
        .with_mailer(mailer.clone())
        .with_reset_base_url("http://localhost:3000/");

    Ok((cmd, mailer))
}

#[allow(dead_code)]
pub async fn create_user(
    cmd: &udb_user::Command,
    name: impl Into<String>,
) -> anyhow::Result<udb_shared::Session> {
    let name = name.into();

    Ok(cmd
        .create_account(Credentials::new(
            format!("{name}@udb.localhost"),
            "my_password",
        ))
        .await?)
}
