//! Mod store / live-load synchronization
//!
//! [`ModHandler`] owns three locations:
//! - the store (`<home>/jeffm/mods`), which keeps every installed mod
//! - the game's `~mods` folder, whose contents are the enabled set
//! - the hidden list (`<home>/jeffm/hidden.txt`)
//!
//! A mod is identified by its file name, extension included.

mod bootstrap;
mod hidden;
mod install;
mod listing;
mod state;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{ModError, Result};
use crate::game_finder::SteamLocator;
use crate::paths::AppLayout;
use crate::utils::base_name;

/// What to do when an installed file name is already in the store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConflictPolicy {
    /// Replace the stored file
    Overwrite,
    /// Keep the stored file and move on
    #[default]
    SkipIfExists,
    /// Stop with `AlreadyInstalled`
    ErrorIfExists,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InstallOptions {
    pub policy: ConflictPolicy,
    /// Print one line per file written to the store
    pub print_installs: bool,
}

/// A stored mod and whether it is currently in the game's `~mods` folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModStatus {
    pub name: String,
    pub enabled: bool,
}

impl fmt::Display for ModStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.enabled {
            write!(f, "[ENABLED] {}", self.name)
        } else {
            write!(f, "[DISABLED] {}", self.name)
        }
    }
}

#[derive(Debug, Clone)]
pub struct ModHandler {
    install_path: PathBuf,
    home_path: PathBuf,
    layout: AppLayout,
    loaded_path: PathBuf,
}

impl ModHandler {
    /// Build a handler for the current user, discovering the game through Steam
    pub fn from_env() -> Result<Self> {
        let home = dirs::home_dir().ok_or(ModError::HomeDirUnavailable)?;
        Self::new(&home, &SteamLocator::new(&home))
    }

    pub fn install_path(&self) -> &Path {
        &self.install_path
    }

    pub fn home_path(&self) -> &Path {
        &self.home_path
    }

    pub fn layout(&self) -> &AppLayout {
        &self.layout
    }

    pub fn store_path(&self) -> PathBuf {
        self.layout.store_dir()
    }

    pub fn loaded_path(&self) -> &Path {
        &self.loaded_path
    }

    fn stored(&self, name: &str) -> PathBuf {
        self.layout.stored_mod(name)
    }

    fn loaded(&self, name: &str) -> PathBuf {
        self.loaded_path.join(name)
    }
}

/// Reduce user input to a bare mod name
fn mod_name(name: &str) -> Result<&str> {
    let base = base_name(name.trim());
    if base.is_empty() || base == "." || base == ".." {
        return Err(ModError::ModDoesNotExist(name.to_string()));
    }
    Ok(base)
}
