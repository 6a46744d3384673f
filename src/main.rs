use message_board::{AppState, config::Config, create_router};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("message_board=info,tower_http=debug")),
        )
        .init();

    info!("Starting message board v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env().inspect_err(|e| error!("Invalid configuration: {}", e))?;
    config.print_info();

    // pool lazy: il server parte anche se il database non è ancora raggiungibile
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy_with(config.connect_options());

    let probe = pool.clone();
    tokio::spawn(async move {
        match probe.acquire().await {
            Ok(_) => info!("Connected to PostgreSQL database"),
            Err(e) => warn!("Could not acquire a database connection: {}", e),
        }
    });

    let state = Arc::new(AppState::new(pool.clone()));
    let app = create_router(state);

    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = TcpListener::bind(&addr)
        .await
        .inspect_err(|e| error!("Failed to bind {}: {}", addr, e))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Server closed");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("SIGINT received, shutting down gracefully"),
        _ = terminate => info!("SIGTERM received, shutting down gracefully"),
    }
}
