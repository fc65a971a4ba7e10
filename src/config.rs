use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use udb_user::{Provider, ProviderKey};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// IANA timezone deciding which calendar day is "today"
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

fn default_timezone() -> String {
    udb_shared::DEFAULT_TIMEZONE.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_days: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    /// Deliver reset emails over SMTP; when off the reset link is only logged
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default = "default_from_email")]
    pub from_email: String,
    #[serde(default = "default_from_name")]
    pub from_name: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_email: default_from_email(),
            from_name: default_from_name(),
            base_url: default_base_url(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_email() -> String {
    "noreply@udb-events.app".to_string()
}

fn default_from_name() -> String {
    "UDB Events".to_string()
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// File holding the signed-in session between invocations
    #[serde(default = "default_session_path")]
    pub path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: default_session_path(),
        }
    }
}

fn default_session_path() -> String {
    ".udb-session.json".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub google: Option<ProviderKey>,
    #[serde(default)]
    pub github: Option<ProviderKey>,
}

impl ProvidersConfig {
    /// Configured providers with their verification keys
    pub fn keys(&self) -> Vec<(Provider, ProviderKey)> {
        [
            (Provider::Google, &self.google),
            (Provider::GitHub, &self.github),
        ]
        .into_iter()
        .filter_map(|(provider, key)| key.clone().map(|key| (provider, key)))
        .collect()
    }
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy variables (DATABASE_URL, JWT_SECRET)
    /// 2. Environment variables (UDB__DATABASE__URL, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("database.url", "sqlite:udb-events.db")?
            .set_default("database.max_connections", 5)?
            .set_default("jwt.expiration_days", 7)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("UDB")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }
        if let Ok(jwt_secret) = env::var("JWT_SECRET") {
            builder = builder.set_override("jwt.secret", jwt_secret)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.jwt.secret.len() < 32 {
            return Err("JWT secret must be at least 32 characters long".to_string());
        }
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if !udb_shared::is_known_timezone(&self.app.timezone) {
            return Err(format!("Unknown timezone {}", self.app.timezone));
        }
        for (provider, key) in self.providers.keys() {
            if key.secret.is_none() && key.public_key_pem.is_none() {
                return Err(format!(
                    "{} provider needs either a secret or a public_key_pem",
                    provider.label()
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use temp_dir::TempDir;

    fn config(secret: &str, max_connections: u32) -> Config {
        Config {
            app: AppConfig::default(),
            database: DatabaseConfig {
                url: "sqlite:test.db".to_string(),
                max_connections,
            },
            jwt: JwtConfig {
                secret: secret.to_string(),
                expiration_days: 7,
            },
            email: EmailConfig::default(),
            observability: ObservabilityConfig::default(),
            session: SessionConfig::default(),
            providers: ProvidersConfig::default(),
        }
    }

    #[test]
    fn test_validation_short_secret() {
        assert!(config("short", 5).validate().is_err());
    }

    #[test]
    fn test_validation_zero_connections() {
        assert!(
            config("test_secret_key_minimum_32_characters_long", 0)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_validation_provider_without_key() {
        let mut config = config("test_secret_key_minimum_32_characters_long", 5);
        config.providers.github = Some(ProviderKey {
            issuer: "https://github.com".to_string(),
            audience: "udb-events".to_string(),
            secret: None,
            public_key_pem: None,
        });

        assert_eq!(
            config.validate().unwrap_err(),
            "GitHub provider needs either a secret or a public_key_pem"
        );
    }

    #[test]
    fn test_validation_unknown_timezone() {
        let mut config = config("test_secret_key_minimum_32_characters_long", 5);
        config.app.timezone = "Mars/Olympus_Mons".to_string();
        assert_eq!(
            config.validate().unwrap_err(),
            "Unknown timezone Mars/Olympus_Mons"
        );

        config.app.timezone = "America/El_Salvador".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(
            config("test_secret_key_minimum_32_characters_long", 5)
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.child("udb.toml");
        std::fs::write(
            &path,
            r#"
[app]
timezone = "America/El_Salvador"

[jwt]
secret = "file_secret_key_minimum_32_characters_long"

[session]
path = "/tmp/udb-session.json"

[providers.google]
issuer = "https://accounts.google.com"
audience = "udb-events"
secret = "google_secret_key_minimum_32_characters"
"#,
        )
        .unwrap();

        let config = Config::load(Some(path.display().to_string())).unwrap();

        assert_eq!(config.jwt.expiration_days, 7);
        assert_eq!(config.app.timezone, "America/El_Salvador");
        assert_eq!(config.session.path, "/tmp/udb-session.json");
        assert!(!config.email.enabled);

        let keys = config.providers.keys();
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].0, Provider::Google);
        assert_eq!(keys[0].1.issuer, "https://accounts.google.com");
    }
}
