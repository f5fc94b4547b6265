//! Persistent settings for taskpad.
//!
//! Settings are kept as pretty-printed JSON in `config.json` inside the
//! per-user data directory (see [`DataStorage`]). Every module is optional,
//! so a missing file simply means "use the defaults".
//!
//! ```rust,no_run
//! use taskpad::libs::config::Config;
//!
//! let config = Config::read()?;
//! if let Some(api) = &config.api {
//!     println!("Task API: {}", api.api_url);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::api::tasks::ApiConfig;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A module offered by the interactive setup.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Location of the task API. Unset means the built-in default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiConfig>,
}

impl Config {
    /// Loads the stored configuration, or the default one when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str).map_err(|e| msg_error_anyhow!(format!("{}: {}", Message::ConfigParseError, e)))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the stored configuration. A missing file is not an error.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Runs the interactive setup, starting from the stored values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let node_descriptions = vec![ApiConfig::module()];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt("Select modules to configure")
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .defaults(&[true])
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "api" => config.api = Some(ApiConfig::init(&config.api)?),
                _ => {}
            }
        }

        Ok(config)
    }
}
