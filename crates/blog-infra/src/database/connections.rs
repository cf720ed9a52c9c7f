use serde::Deserialize;

#[cfg(feature = "postgres")]
use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Connection settings for the PostgreSQL store.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub name: String,
    pub user: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_ssl_mode")]
    pub ssl_mode: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_port() -> u16 {
    5432
}

fn default_ssl_mode() -> String {
    "disable".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    2
}

impl DatabaseConfig {
    /// Connection URL in the form sqlx expects.
    pub fn url(&self) -> String {
        let credentials = if self.password.is_empty() {
            self.user.clone()
        } else {
            format!("{}:{}", self.user, self.password)
        };
        format!(
            "postgres://{}@{}:{}/{}?sslmode={}",
            credentials, self.host, self.port, self.name, self.ssl_mode
        )
    }
}

/// Handle to the connection pool shared by every repository.
#[cfg(feature = "postgres")]
pub struct DatabaseConnections {
    pub main: DbConn,
}

#[cfg(not(feature = "postgres"))]
pub struct DatabaseConnections;

#[cfg(feature = "postgres")]
impl DatabaseConnections {
    /// Open the pool described by `config`.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!(
            host = %config.host,
            port = config.port,
            database = %config.name,
            "Connecting to database..."
        );

        let opts = ConnectOptions::new(config.url())
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let main = Database::connect(opts).await?;
        tracing::info!("Database connected (pool: {})", config.max_connections);

        Ok(Self { main })
    }
}
