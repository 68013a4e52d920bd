use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use employee_service::api::{AppState, create_router};
use employee_service::config::{ConfigLoader, ServiceConfig};
use employee_service::store::MemoryStore;

#[derive(Parser, Debug)]
#[command(name = "employee-service", version, about = "Employee record service")]
struct Cli {
    /// YAML configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Address to bind, overriding config and HOST.
    #[arg(long)]
    host: Option<IpAddr>,
    /// Port to bind, overriding config and PORT.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let loader = load_config_file(&cli)?;
    init_tracing(loader.config())?;
    let config = apply_overrides(loader, &cli);

    let state = AppState::new(Arc::new(MemoryStore::new()));
    serve(config.server.addr(), state).await
}

fn load_config_file(cli: &Cli) -> Result<ConfigLoader> {
    match &cli.config {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("failed to load {}", path.display())),
        None => Ok(ConfigLoader::default()),
    }
}

/// Layers environment, then command line, over the file configuration.
fn apply_overrides(loader: ConfigLoader, cli: &Cli) -> ServiceConfig {
    let mut config = loader.with_env_overrides().into_config();
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config
}

fn init_tracing(config: &ServiceConfig) -> Result<()> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logging.filter.clone());
    let env_filter = EnvFilter::try_new(filter).context("invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
}

async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!(%addr, "employee service listening");
    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;
    info!("employee service stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
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
    info!("shutdown signal received");
}
