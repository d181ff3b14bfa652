//! Game install detection
//!
//! Locates the Marvel Rivals install root. Steam libraries are searched on
//! every platform; on Windows every drive letter is also probed for the two
//! usual `steamapps/common` locations.

mod steam;
mod vdf;

use std::path::{Path, PathBuf};

pub use steam::{find_game_install_path, find_steam_installations, library_folders};
pub use vdf::{parse_library_folders, parse_vdf, AppManifest, VdfNode};

use crate::error::{ModError, Result};
use crate::logging::{log_info, log_warning};

pub const GAME_NAME: &str = "Marvel Rivals";
pub const STEAM_APP_ID: &str = "2767030";
/// Folder name under `steamapps/common`
pub const GAME_FOLDER: &str = "MarvelRivals";

/// Resolves where the game is installed.
///
/// Bootstrap only calls this on first run; afterwards the path comes from
/// the config file.
pub trait GameLocator {
    fn resolve_install_path(&self) -> Result<PathBuf>;
}

/// Default locator: Steam libraries, then (Windows only) drive letters
#[derive(Debug, Clone)]
pub struct SteamLocator {
    home: PathBuf,
}

impl SteamLocator {
    pub fn new(home: &Path) -> Self {
        Self {
            home: home.to_path_buf(),
        }
    }
}

impl GameLocator for SteamLocator {
    fn resolve_install_path(&self) -> Result<PathBuf> {
        if let Some(path) = find_game_install_path(&self.home, STEAM_APP_ID, GAME_FOLDER) {
            log_info(&format!("{} found at {}", GAME_NAME, path.display()));
            return Ok(path);
        }

        if let Some(path) = scan_drives() {
            log_info(&format!("{} found at {}", GAME_NAME, path.display()));
            return Ok(path);
        }

        log_warning(&format!("{} installation not detected", GAME_NAME));
        Err(ModError::GameNotFound)
    }
}

/// A locator that always answers with the same path (manual override)
#[derive(Debug, Clone)]
pub struct FixedLocator(pub PathBuf);

impl GameLocator for FixedLocator {
    fn resolve_install_path(&self) -> Result<PathBuf> {
        Ok(self.0.clone())
    }
}

/// Steam library layouts probed on each drive
#[cfg_attr(not(windows), allow(dead_code))]
const DRIVE_CANDIDATES: &[&str] = &[
    r"Program Files (x86)\Steam\steamapps\common",
    r"SteamLibrary\steamapps\common",
];

#[cfg(windows)]
fn scan_drives() -> Option<PathBuf> {
    ('A'..='Z')
        .map(|letter| PathBuf::from(format!("{}:\\", letter)))
        .filter(|root| root.exists())
        .flat_map(|root| {
            DRIVE_CANDIDATES
                .iter()
                .map(move |candidate| root.join(candidate).join(GAME_FOLDER))
        })
        .find(|path| path.is_dir())
}

#[cfg(not(windows))]
fn scan_drives() -> Option<PathBuf> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_locator_returns_its_path() {
        let locator = FixedLocator(PathBuf::from("/games/MarvelRivals"));
        assert_eq!(
            locator.resolve_install_path().unwrap(),
            PathBuf::from("/games/MarvelRivals")
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn steam_locator_reports_missing_game() {
        let home = tempfile::tempdir().unwrap();
        let err = SteamLocator::new(home.path()).resolve_install_path().unwrap_err();
        assert!(matches!(err, ModError::GameNotFound));
    }
}
