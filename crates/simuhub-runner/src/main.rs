use anyhow::Result;
use clap::Parser;
use simuhub_runner::cli::Cli;
use simuhub_runner::{ConfigSource, SimuHubConfig, logging};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, source) = SimuHubConfig::load(cli.config.as_deref())?;
    logging::init(&config.logging, cli.verbose)?;

    match &source {
        ConfigSource::File(path) => info!(path = %path.display(), "loaded configuration"),
        ConfigSource::Defaults(path) => {
            warn!(path = %path.display(), "configuration file not found, using defaults")
        }
    }
    info!(version = env!("CARGO_PKG_VERSION"), command = ?cli.command, "starting simuhub");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    cli.execute(&config, stdin.lock(), &mut stdout).await
}
