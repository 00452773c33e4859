use anyhow::Result;
use tracing_subscriber::EnvFilter;

use wayfarer::config::WayfarerConfig;
use wayfarer::web;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = WayfarerConfig::from_env()?;
    tracing::info!(
        "Starting wayfarer {} on port {}",
        wayfarer::VERSION,
        config.port
    );

    web::run(config).await
}
