use clap::Parser;
use ocr_relay_server::config::{Args, Config};
use ocr_relay_server::server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Values from .env must be visible before clap reads the environment
    let dotenv_result = dotenv::dotenv();

    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match dotenv_result {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) => tracing::debug!("No .env file loaded: {}", e),
    }

    let config = Config::from(args);

    tracing::info!("Starting ocr-relay-server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Binding to {}", config.bind_addr());

    server::run(config).await
}
