//! greeting-service entry point.
//!
//! Parses CLI arguments, loads configuration (built-in defaults unless a TOML
//! file is given), initializes tracing, builds the router once and hands it
//! to the listener.

use clap::Parser;

use greeting_service::config::AppConfig;
use greeting_service::http::start_server;
use greeting_service::logging;
use greeting_service::routes::create_router;
use greeting_service::AppError;

/// greeting-service: a greeting endpoint and a health probe
#[derive(Parser, Debug)]
#[command(name = "greeting-service", version, about)]
struct Args {
    /// Path to an optional configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "greeting_service=debug,axum=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let config = AppConfig::load_or_default(args.config.as_deref())?;

    let log_filter = logging::resolve_log_filter(args.log_level, std::env::var("RUST_LOG").ok());
    logging::init(&log_filter, config.logging.format);

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        source = args.config.as_deref().unwrap_or("defaults"),
        "Loaded configuration"
    );

    let app = create_router();
    start_server(app, &config).await?;

    Ok(())
}
