//! bgpview - command line front end for the BGPView API
//!
//! Every subcommand performs one lookup and prints the `data` payload.

mod cli;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bgpview::config::{parse_timeout, Config, OutputFormat};
use bgpview::output;

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        output::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    // Load configuration, flags win over environment
    let mut config = Config::load()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(timeout) = cli.timeout.as_deref() {
        config.timeout = parse_timeout(timeout)?;
    }
    if let Some(format) = cli.format.as_deref() {
        config.output_format = OutputFormat::parse(format)?;
    }

    // Execute command
    match cli.command {
        Commands::Asn(args) => cli::asn::execute(&config, args).await,
        Commands::Prefix(args) => cli::ip::execute_prefix(&config, args).await,
        Commands::Ip(args) => cli::ip::execute_ip(&config, args).await,
        Commands::Ix(args) => cli::ix::execute(&config, args).await,
        Commands::Search(args) => cli::search::execute(&config, args).await,
        Commands::Raw(args) => cli::raw::execute(&config, args).await,
    }
}
