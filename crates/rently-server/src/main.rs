//! Rently Server — Application entry point.

use std::sync::Arc;

use rently_auth::{AuthConfig, AuthService};
use rently_db::repository::{SurrealTokenRepository, SurrealUserRepository};
use rently_db::{DbManager, run_migrations};
use rently_server::{AppState, Config, routes};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("rently=info".parse().unwrap()),
        )
        .json()
        .init();

    let config = Config::from_env();
    tracing::info!(port = config.port, "Starting Rently server");

    let manager = DbManager::connect(&config.db).await?;
    let db = manager.client().clone();
    run_migrations(&db).await?;

    let users = match &config.pepper {
        Some(pepper) => SurrealUserRepository::with_pepper(db.clone(), pepper.clone()),
        None => SurrealUserRepository::new(db.clone()),
    };
    let tokens = SurrealTokenRepository::new(db);

    let auth = AuthService::new(
        users,
        tokens,
        AuthConfig {
            pepper: config.pepper.clone(),
        },
    );

    let app = routes::create_router(Arc::new(AppState { auth }));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
