//! Configuration management for `nnago.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                     |
//! |-------------|---------------------------------------------|
//! | `[reading]` | Reading speed and word splitting            |
//! | `[content]` | Article directory and file extensions       |
//! | `[extra]`   | User-defined custom fields                  |
//!
//! Every section is optional, and so is the file itself.
//!
//! # Example
//!
//! ```toml
//! [reading]
//! words_per_minute = 240
//! tokenization = "whitespace"
//!
//! [content]
//! dir = "src/content"
//! extensions = ["md", "mdx"]
//! ```

mod content;
pub mod defaults;
mod error;
mod reading;

pub use content::ContentConfig;
pub use error::ConfigError;
pub use reading::ReadingConfig;

use crate::{
    cli::{Cli, Commands},
    reading::ReadingTimeEstimator,
};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing nnago.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Project root; paths in the file are relative to it (empty: current directory)
    #[serde(skip)]
    pub root: PathBuf,

    /// Path of the loaded config file (empty when running on defaults)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Reading-time settings
    #[serde(default)]
    pub reading: ReadingConfig,

    /// Article discovery settings
    #[serde(default)]
    pub content: ContentConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Load `cli.config` under the root if it exists, otherwise use defaults,
    /// then apply CLI overrides and validate.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.update_with_cli(cli);
        config.validate(cli)?;

        Ok(config)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        if let Some(root) = &cli.root {
            self.root.clone_from(root);
        }

        Self::update_option(&mut self.reading.words_per_minute, cli.wpm.as_ref());
        Self::update_option(&mut self.reading.tokenization, cli.split.as_ref());

        if let Commands::Scan { content, .. } = &cli.command {
            Self::update_option(&mut self.content.dir, content.as_ref());
        }

        self.content.dir = self.root.join(&self.content.dir);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Validate configuration for the current command
    pub fn validate(&self, cli: &Cli) -> Result<()> {
        if self.reading.words_per_minute == 0 {
            bail!(ConfigError::Validation(
                "[reading.words_per_minute] must be greater than zero".into()
            ));
        }

        if self.content.extensions.iter().all(|ext| ext.trim().is_empty()) {
            bail!(ConfigError::Validation(
                "[content.extensions] must have at least one element".into()
            ));
        }

        if cli.is_scan() {
            let dir = &self.content.dir;
            if !dir.exists() {
                bail!(ConfigError::Validation(format!(
                    "[content.dir] `{}` not found",
                    dir.display()
                )));
            }
            if !dir.is_dir() {
                bail!(ConfigError::Validation(format!(
                    "[content.dir] `{}` is not a directory",
                    dir.display()
                )));
            }
        }

        Ok(())
    }

    /// Build the estimator described by `[reading]`.
    pub fn estimator(&self) -> Result<ReadingTimeEstimator> {
        let estimator =
            ReadingTimeEstimator::new(self.reading.words_per_minute, self.reading.tokenization)?;
        Ok(estimator)
    }
}
