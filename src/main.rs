//! Techland Server — Parts Shop Backend
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use chrono::Utc;
use tracing_subscriber::{EnvFilter, fmt};

use techland_core::config::AppConfig;
use techland_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("TECHLAND_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Techland v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db_pool = techland_database::connection::create_pool(&config.database).await?;

    tracing::info!("Running database migrations...");
    techland_database::migration::run_migrations(&db_pool).await?;
    tracing::info!("Database migrations complete");

    // ── Step 2: Initialize repositories ──────────────────────────
    let user_repo = Arc::new(techland_database::repositories::user::UserRepository::new(
        db_pool.clone(),
    ));
    let part_repo = Arc::new(techland_database::repositories::part::PartRepository::new(
        db_pool.clone(),
    ));
    let review_repo = Arc::new(
        techland_database::repositories::review::ReviewRepository::new(db_pool.clone()),
    );
    let order_repo = Arc::new(
        techland_database::repositories::order::OrderRepository::new(db_pool.clone()),
    );
    let item_repo = Arc::new(techland_database::repositories::item::ItemRepository::new(
        db_pool.clone(),
    ));

    // ── Step 3: Initialize auth system ───────────────────────────
    tracing::info!("Initializing authentication system...");
    let token_issuer = Arc::new(techland_auth::TokenIssuer::new(&config.auth));
    let token_verifier = Arc::new(techland_auth::TokenVerifier::new(&config.auth));

    // ── Step 4: Initialize payment provider ──────────────────────
    tracing::info!(
        "Initializing payment provider (provider: {})...",
        config.billing.provider
    );
    let payment_provider = techland_billing::from_config(&config.billing)?;

    // ── Step 5: Build and start HTTP server ──────────────────────
    tracing::info!(
        "Starting HTTP server on {}:{}...",
        config.server.host,
        config.server.port
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);

    let app_state = techland_api::state::AppState {
        config: Arc::new(config),
        token_issuer,
        token_verifier,
        payment_provider,
        user_repo,
        part_repo,
        review_repo,
        order_repo,
        item_repo,
        started_at: Utc::now(),
    };

    let app = techland_api::router::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Techland server listening on {}", addr);

    // ── Step 6: Graceful shutdown ────────────────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("Techland server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
