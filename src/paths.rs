//! On-disk layout of the jeffm app folder and the game's Paks tree

use std::path::{Path, PathBuf};

/// Folder under the user's home holding everything jeffm owns
pub const APP_FOLDER: &str = "jeffm";
pub const CONFIG_FILE: &str = "config.toml";
pub const STORE_DIR: &str = "mods";
pub const HIDDEN_FILE: &str = "hidden.txt";
pub const PROFILES_DIR: &str = "profiles";
pub const LOGS_DIR: &str = "logs";

/// Path of the Paks folder relative to the game's install root
pub const PAKS_SUBPATH: &[&str] = &["MarvelGame", "Marvel", "Content", "Paks"];
/// Folder inside Paks that the game scans for mods at launch
pub const LOADED_DIR: &str = "~mods";

/// Packed-asset extension, compared lowercase
pub const MOD_EXTENSION: &str = "pak";

/// Resolved locations of the app folder, rooted at a home directory.
///
/// Built explicitly rather than from a process-wide default so that several
/// layouts can coexist (one per scratch home in tests).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppLayout {
    root: PathBuf,
}

impl AppLayout {
    pub fn new(home: &Path) -> Self {
        Self {
            root: home.join(APP_FOLDER),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn store_dir(&self) -> PathBuf {
        self.root.join(STORE_DIR)
    }

    pub fn hidden_file(&self) -> PathBuf {
        self.root.join(HIDDEN_FILE)
    }

    pub fn profiles_dir(&self) -> PathBuf {
        self.root.join(PROFILES_DIR)
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.root.join(LOGS_DIR)
    }

    pub fn stored_mod(&self, name: &str) -> PathBuf {
        self.store_dir().join(name)
    }
}

/// `<install>/MarvelGame/Marvel/Content/Paks`
pub fn paks_dir(install_path: &Path) -> PathBuf {
    PAKS_SUBPATH
        .iter()
        .fold(install_path.to_path_buf(), |path, part| path.join(part))
}

/// `<install>/MarvelGame/Marvel/Content/Paks/~mods`
pub fn loaded_dir(install_path: &Path) -> PathBuf {
    paks_dir(install_path).join(LOADED_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_rooted_under_home() {
        let layout = AppLayout::new(Path::new("/home/user"));
        assert_eq!(layout.root(), Path::new("/home/user/jeffm"));
        assert_eq!(layout.config_file(), Path::new("/home/user/jeffm/config.toml"));
        assert_eq!(layout.stored_mod("Cool.pak"), Path::new("/home/user/jeffm/mods/Cool.pak"));
        assert_eq!(layout.profiles_dir(), Path::new("/home/user/jeffm/profiles"));
    }

    #[test]
    fn loaded_dir_sits_inside_paks() {
        let install = Path::new("/games/MarvelRivals");
        assert_eq!(
            loaded_dir(install),
            Path::new("/games/MarvelRivals/MarvelGame/Marvel/Content/Paks/~mods")
        );
        assert!(loaded_dir(install).starts_with(paks_dir(install)));
    }
}
