use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod routes;
mod state;
mod sweeper;

#[cfg(test)]
mod tests;

use self::state::AppState;
use self::sweeper::sweep_cache;

#[derive(Parser)]
#[command(name = "vocab-server", about = "Vocabulary lookup service")]
struct Cli {
    /// JSON config file, defaults and environment when absent
    #[arg(long)]
    config: Option<PathBuf>,
    /// Bind address
    #[arg(long)]
    host: Option<String>,
    /// HTTP port
    #[arg(long)]
    port: Option<u16>,
    /// Directory for persisted words
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    let mut config = config::load_config(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(dir) = cli.data_dir {
        config.store.data_dir = Some(dir);
    }

    tracing::info!("Initializing state...");
    let state = AppState::new(config).await?;

    let cancel = CancellationToken::new();
    let sweeper = tokio::spawn(sweep_cache(
        state.lookup.cache().clone(),
        Duration::from_secs(state.config.cache.sweep_interval_secs.max(1)),
        cancel.child_token(),
    ));

    let address = state.config.server.address();
    let app = routes::router(state);

    let listener = TcpListener::bind(&address).await?;
    tracing::info!("Server running on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    cancel.cancel();
    if let Err(e) = sweeper.await {
        tracing::error!("cache sweeper panicked: {e}");
    }

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("failed to install terminate handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
