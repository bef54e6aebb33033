//! Command-line interface for cold_call.

use clap::Parser;

/// Cold Call - recency-weighted name picker web service
#[derive(Parser, Debug)]
#[command(name = "cold_call")]
#[command(about = "Recency-weighted name picker web service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind to
    #[arg(short, long, default_value = "3000")]
    pub port: u16,
}
