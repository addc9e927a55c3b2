use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use license_bind::config::Config;
use license_bind::db::{AppState, create_pool, init_db, queries};
use license_bind::entitlements::RemoteEntitlements;
use license_bind::handlers;

#[derive(Parser, Debug)]
#[command(name = "license-bind")]
#[command(about = "License key to device binding service")]
struct Cli {
    /// Listen port (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// SQLite database path (overrides DATABASE_PATH)
    #[arg(short, long)]
    database: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "license_bind=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env();
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(database) = cli.database {
        config.database_path = database;
    }

    let db_pool = create_pool(&config.database_path).expect("Failed to create database pool");
    {
        let conn = db_pool.get().expect("Failed to get connection");
        init_db(&conn).expect("Failed to initialize database");
        match queries::count_bindings(&conn) {
            Ok(count) => tracing::info!("Opened {} ({} bindings)", config.database_path, count),
            Err(e) => tracing::warn!("Failed to count bindings: {}", e),
        }
    }

    if config.entitlements.url.is_none() || config.entitlements.service_key.is_none() {
        tracing::warn!("Remote entitlement source not configured; /check will fail until it is");
    }
    let remote = RemoteEntitlements::new(&config.entitlements)
        .expect("Failed to create entitlement client");

    let state = AppState::new(db_pool, Arc::new(remote));
    let app = handlers::build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("License API running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Failed to start server");

    tracing::info!("Server stopped");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}
