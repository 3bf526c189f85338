use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coda::app;
use coda::config::{load_config, ServerConfig};
use coda::http::HttpServer;
use coda::jobs::render::RenderSlot;
use coda::net::Listener;

#[derive(Parser)]
#[command(name = "coda")]
#[command(about = "Serves named page services over hand-rolled HTTP", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind, overriding the configuration.
    #[arg(long)]
    host: Option<String>,

    /// Port to bind, overriding the configuration.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coda=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    apply_overrides(&mut config, cli.host.as_deref(), cli.port);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        strategy = ?config.routing.strategy,
        "Configuration loaded"
    );

    let render_slot = RenderSlot::new();
    let registry = app::build_registry(&render_slot);
    tracing::info!(services = registry.len(), "Services registered");

    let listener = Listener::bind(&config.listener).await?;
    let server = HttpServer::new(config, registry, render_slot);
    server.run(listener).await?;

    Ok(())
}

/// Apply `--host` / `--port` on top of the configured bind address.
fn apply_overrides(config: &mut ServerConfig, host: Option<&str>, port: Option<u16>) {
    if host.is_none() && port.is_none() {
        return;
    }

    let (current_host, current_port) = config
        .listener
        .bind_address
        .rsplit_once(':')
        .map(|(h, p)| (h.to_string(), p.to_string()))
        .unwrap_or_else(|| (config.listener.bind_address.clone(), "80".to_string()));

    let host = host.map(str::to_string).unwrap_or(current_host);
    let port = port.map(|p| p.to_string()).unwrap_or(current_port);
    config.listener.bind_address = format!("{}:{}", host, port);
}
