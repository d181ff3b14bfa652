use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ModError, Result};

// ============================================================================
// Main App Config
// ============================================================================

/// Contents of `config.toml`.
///
/// Config files written by earlier releases used `rivalsPath` (and before
/// that `mrPath`) for the install root, so both are accepted on read.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(alias = "rivalsPath", alias = "mrPath")]
    pub install_path: PathBuf,
}

impl Config {
    pub fn new(install_path: impl Into<PathBuf>) -> Self {
        Self {
            install_path: install_path.into(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| ModError::from_io(e, "config file", path))?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
