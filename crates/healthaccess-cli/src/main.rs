use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use healthaccess_cli::cli::Cli;
use healthaccess_cli::commands::{self, AppContext};
use healthaccess_cli::config;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config_dir = config::config_dir()?;
    let config = config::load_config_from(&config_dir)?;
    let data_dir = config::resolve_data_dir(cli.data_dir, &config)?;
    tracing::debug!(data_dir = %data_dir.display(), "starting healthaccess");

    let mut ctx = AppContext {
        config,
        data_dir,
        config_dir,
    };
    commands::run(cli.command, &mut ctx).await
}
