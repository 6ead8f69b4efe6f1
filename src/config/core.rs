use std::path::Path;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use serde::Deserialize;

use crate::opts::Features;

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Startup settings that shape the option registry and logging
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MinerConfig {
    /// Override for the GPU option group, `None` follows the build
    #[serde(default)]
    pub gpu: Option<bool>,

    /// Default tracing filter
    #[serde(default = "default_log")]
    pub log: String,
}

fn default_log() -> String {
    "info".to_string()
}

impl MinerConfig {
    /// Defaults, then user config, then `./gapminer.toml`, then `GAPMINER_*`
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::string(DEFAULT_CONFIG))
            .merge(Toml::file(Self::user_config_path()))
            .merge(Toml::file("gapminer.toml"))
            .merge(Env::prefixed("GAPMINER_"));

        Self::from_figment(figment)
    }

    /// Defaults merged with a single explicit file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::string(DEFAULT_CONFIG))
            .merge(Toml::file(path));

        Self::from_figment(figment)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: MinerConfig = figment
            .extract()
            .context("Failed to parse gapminer configuration")?;
        tracing::trace!("CONFIG LOAD: gpu = {:?}, log = {}", config.gpu, config.log);
        Ok(config)
    }

    /// Feature set the option registry is built with
    pub fn features(&self) -> Features {
        match self.gpu {
            Some(gpu) => Features { gpu },
            None => Features::default(),
        }
    }

    fn user_config_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{}/.config/gapminer/config.toml", home),
            Err(_) => "~/.config/gapminer/config.toml".to_string(),
        }
    }
}
