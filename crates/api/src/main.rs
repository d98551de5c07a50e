use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bistro_api::config::ServerConfig;
use bistro_api::router::build_app_router;
use bistro_api::state::AppState;
use bistro_core::content::SiteContent;
use bistro_db::{MemoryReservationStore, PgReservationStore, ReservationStore};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bistro_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        frontend_url = %config.frontend_url,
        "Loaded server configuration"
    );

    // --- Storage ---
    let store = connect_store(&config).await;

    // --- Site content ---
    let content = match &config.site_content_path {
        Some(path) => SiteContent::load(path),
        None => SiteContent::builtin(),
    };
    let content = match content {
        Ok(content) => content,
        Err(e) => fatal("Failed to load site content", &e),
    };
    tracing::info!(
        dishes = content.dishes.len(),
        team = content.team.len(),
        "Site content loaded"
    );

    // --- App state ---
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
        content: Arc::new(content),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Open the process-wide store. Any failure here ends the process.
async fn connect_store(config: &ServerConfig) -> Arc<dyn ReservationStore> {
    if config.uses_memory_store() {
        tracing::warn!("Using in-memory reservation store; reservations are not durable");
        return Arc::new(MemoryReservationStore::new());
    }

    let pool = match bistro_db::create_pool(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => fatal("Failed to connect to database", &e),
    };
    tracing::info!("Database connection pool created");

    if let Err(e) = bistro_db::health_check(&pool).await {
        fatal("Database health check failed", &e);
    }
    tracing::info!("Database health check passed");

    if let Err(e) = bistro_db::run_migrations(&pool).await {
        fatal("Failed to run database migrations", &e);
    }
    tracing::info!("Database migrations applied");

    Arc::new(PgReservationStore::new(pool))
}

/// Log a startup failure and exit.
fn fatal(context: &str, err: &dyn std::error::Error) -> ! {
    tracing::error!(error = %err, "{context}");
    std::process::exit(1);
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
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
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
