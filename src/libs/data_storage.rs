use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "taskpad";

/// Per-user application data directory.
///
/// - **Windows**: `%LOCALAPPDATA%\taskpad`
/// - **macOS**: `~/Library/Application Support/taskpad`
/// - **Linux**: `~/.local/share/taskpad`
#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        let base_path = Path::new(&base_path).join(APP_NAME);

        Self { base_path }
    }

    /// Path of `file_name` inside the data directory, creating the directory on first use.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path).map_err(|e| msg_error_anyhow!(format!("{}: {}", Message::DataStoragePathError, e)))?;
        }
        Ok(self.base_path.join(file_name))
    }
}
