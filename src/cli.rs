//! Command line arguments

use crate::config::Config;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Terminal demo of side-navigation drawer patterns
#[derive(Parser, Debug)]
#[command(name = "navdrawer", version, about)]
pub struct Cli {
    /// Write a default configuration file and exit (defaults to the XDG config path)
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub generate_config: Option<Option<PathBuf>>,
}

impl Cli {
    /// Where to write the generated config, if generation was requested
    pub fn generate_config_path(&self) -> Result<Option<PathBuf>> {
        match &self.generate_config {
            None => Ok(None),
            Some(Some(path)) => Ok(Some(path.clone())),
            Some(None) => Config::get_default_config_path().map(Some),
        }
    }
}
