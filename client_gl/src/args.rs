use std::io;
use std::path::PathBuf;

use clap::Parser;
use game_core::{Config, ConfigError};
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(name = "pong", about = "Two player Pong on one keyboard")]
pub struct Args {
    /// TOML file overriding the default tuning
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Court (and window) width
    #[arg(long)]
    pub width: Option<u32>,
    /// Court (and window) height
    #[arg(long)]
    pub height: Option<u32>,
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("could not read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Args {
    pub fn load_config(&self) -> Result<Config, ConfigLoadError> {
        let mut config = match &self.config {
            Some(path) => {
                let src = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
                    path: path.clone(),
                    source,
                })?;
                log::info!("loading config from {:?}", path);
                Config::from_toml_str(&src)?
            }
            None => Config::new(),
        };

        if self.width.is_some() || self.height.is_some() {
            let width = self.width.map_or(config.court_width, |w| w as f32);
            let height = self.height.map_or(config.court_height, |h| h as f32);
            config = config.with_court_size(width, height);
            config.validate()?;
        }

        Ok(config)
    }
}
