//! # Blog API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use tracing_actix_web::TracingLogger;

use blog_infra::{
    Argon2PasswordService, DatabaseConnections, JwtTokenService, SmtpMailer,
    database::{PostgresLikeRepository, PostgresPostRepository, PostgresUserRepository},
};

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::AppConfig;
use observability::RequestIdMiddleware;
use state::{Adapters, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    telemetry::init_telemetry(&config.telemetry);

    tracing::info!(
        "Starting Blog API Server on {}:{}",
        config.server.host,
        config.server.port
    );

    let db = DatabaseConnections::init(&config.database)
        .await
        .context("Failed to connect to database")?;

    Migrator::up(&db.main, None)
        .await
        .context("Failed to migrate database")?;
    tracing::info!("Database schema up to date");

    let passwords = Argon2PasswordService::with_config(config.password)
        .context("Invalid password hashing parameters")?;
    let mailer = SmtpMailer::new(&config.email).context("Invalid email configuration")?;

    let state = AppState::new(Adapters {
        users: Arc::new(PostgresUserRepository::new(db.main.clone())),
        posts: Arc::new(PostgresPostRepository::new(db.main.clone())),
        likes: Arc::new(PostgresLikeRepository::new(db.main.clone())),
        passwords: Arc::new(passwords),
        tokens: Arc::new(JwtTokenService::new(config.jwt.clone())),
        mailer: Arc::new(mailer),
    });

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.server.host.as_str(), config.server.port))
    .with_context(|| {
        format!(
            "Failed to bind {}:{}",
            config.server.host, config.server.port
        )
    })?
    .run()
    .await?;

    Ok(())
}
