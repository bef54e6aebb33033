//! Cold Call - web service entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use cold_call::{ClassRegistry, router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    info!(host = %cli.host, port = cli.port, "Starting Cold Call server");

    let registry = ClassRegistry::new();
    let app = router(registry);

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    info!("Server ready at http://{}:{}/", cli.host, cli.port);

    axum::serve(listener, app).await?;

    Ok(())
}
