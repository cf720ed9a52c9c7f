//! Application configuration loaded once at startup from a YAML file.
//!
//! Selected environment variables override file values so secrets can stay
//! out of the file: `HOST`, `PORT`, `DATABASE_HOST`, `DATABASE_PASSWORD`,
//! `JWT_SECRET`, `SMTP_PASSWORD`, `LOG_FORMAT`.

use std::env;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use blog_infra::{DatabaseConfig, JwtConfig, PasswordConfig, SmtpConfig};

use crate::telemetry::TelemetryConfig;

pub const DEFAULT_CONFIG_PATH: &str = "config/config.yaml";

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub jwt: JwtConfig,
    pub email: SmtpConfig,
    #[serde(default)]
    pub password: PasswordConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl AppConfig {
    /// Load from `$BLOG_CONFIG` (or `config/config.yaml`) and apply env overrides.
    pub fn load() -> anyhow::Result<Self> {
        let path = env::var("BLOG_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::from_file(Path::new(&path))?;
        config.apply_overrides(|key| env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&raw).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Overlay values from `lookup` (normally the process environment).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("PORT is not a valid port: {port}"))?;
        }
        if let Some(host) = lookup("DATABASE_HOST") {
            self.database.host = host;
        }
        if let Some(password) = lookup("DATABASE_PASSWORD") {
            self.database.password = password;
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            self.jwt.secret = secret;
        }
        if let Some(password) = lookup("SMTP_PASSWORD") {
            self.email.password = password;
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            self.telemetry.json_logs = format.eq_ignore_ascii_case("json");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use blog_infra::SmtpTls;

    use super::*;

    const SAMPLE: &str = r#"
server:
  host: 0.0.0.0
  port: 9000
database:
  host: db
  name: blog
  user: blog
  password: file-password
  ssl_mode: require
jwt:
  secret_key: file-secret
email:
  smtp_server: smtp.example.com
  smtp_port: 587
  username: mailer
  password: mail-password
  from: noreply@example.com
  tls: starttls
"#;

    #[test]
    fn test_parse_yaml_with_defaults() {
        let config = AppConfig::from_yaml(SAMPLE).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.ssl_mode, "require");
        assert_eq!(config.jwt.secret, "file-secret");
        assert_eq!(config.jwt.token_lifetime_minutes, 24 * 60);
        assert_eq!(config.email.tls, SmtpTls::Starttls);
        assert!(!config.telemetry.json_logs);
    }

    #[test]
    fn test_env_overrides_win() {
        let mut config = AppConfig::from_yaml(SAMPLE).unwrap();
        let env: HashMap<&str, &str> = HashMap::from([
            ("PORT", "7000"),
            ("JWT_SECRET", "env-secret"),
            ("DATABASE_PASSWORD", "env-db"),
            ("LOG_FORMAT", "JSON"),
        ]);

        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.server.port, 7000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.jwt.secret, "env-secret");
        assert_eq!(config.database.password, "env-db");
        assert_eq!(config.email.password, "mail-password");
        assert!(config.telemetry.json_logs);
    }

    #[test]
    fn test_bad_port_override_is_an_error() {
        let mut config = AppConfig::from_yaml(SAMPLE).unwrap();

        let result = config.apply_overrides(|key| (key == "PORT").then(|| "http".to_string()));

        assert!(result.is_err());
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(AppConfig::from_yaml("server:\n  port: 1\n").is_err());
    }
}
