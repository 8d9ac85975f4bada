//! Hurcules web application entry point.

use std::net::SocketAddr;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hurcules_web_app::api::{create_router, AppState};
use hurcules_web_app::config::Config;
use hurcules_web_app::utils::shutdown_signal;

/// Hurcules web application.
#[derive(Parser, Debug)]
#[command(name = "hurcules-web-app")]
#[command(about = "Web app serving the Hurcules landing page and JSON API")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// HTTP listen port (overrides the PORT environment variable).
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let mut config = Config::load()?;
    if let Some(port) = args.port {
        config.port = port;
    }

    // Initialize logging; RUST_LOG from the environment wins, then the
    // configured level.
    let filter = if args.verbose {
        EnvFilter::new("hurcules_web_app=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    if let Err(reason) = config.validate() {
        anyhow::bail!("invalid configuration: {reason}");
    }

    info!("Configuration loaded successfully");
    info!(
        "Mode: {}",
        if config.is_development() {
            "DEVELOPMENT"
        } else {
            "PRODUCTION"
        }
    );

    if config.uses_placeholder_secret() && !config.is_development() {
        warn!("SECRET_KEY is the development placeholder; set a real value in production");
    }

    // Create app state and router
    let app_state = AppState::from_config(&config);
    let router = create_router(app_state);

    // Start HTTP server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
