use anyhow::Result;
use clap::Parser;
use navdrawer::cli::Cli;
use navdrawer::config::Config;
use navdrawer::logger::{setup_logging, Logger};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = cli.generate_config_path()? {
        return Config::generate_default_config(path);
    }

    let config = Config::load()?;

    let logger = Logger::new();
    setup_logging(&config.logging, &logger)?;

    navdrawer::ui::run_app(config, logger).await
}
