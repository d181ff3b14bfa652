//! Steam install detection
//!
//! Walks every Steam installation under the home directory, reads its
//! library list and looks for the game's appmanifest in each library.

use std::fs;
use std::path::{Path, PathBuf};

use super::vdf::{parse_library_folders, AppManifest};
use crate::logging::log_info;

/// Steam roots relative to the home directory (native, Flatpak, Snap)
const STEAM_PATHS: &[&str] = &[
    ".local/share/Steam",
    ".steam/debian-installation",
    ".steam/steam",
    ".var/app/com.valvesoftware.Steam/data/Steam",
    ".var/app/com.valvesoftware.Steam/.local/share/Steam",
    "snap/steam/common/.local/share/Steam",
];

/// Find all Steam installations under `home`, deduplicated through symlinks
pub fn find_steam_installations(home: &Path) -> Vec<PathBuf> {
    let mut installations: Vec<PathBuf> = Vec::new();
    let mut seen: Vec<PathBuf> = Vec::new();

    for relative_path in STEAM_PATHS {
        let full_path = home.join(relative_path);
        if !full_path.join("steamapps").exists() {
            continue;
        }

        let canonical = full_path.canonicalize().unwrap_or_else(|_| full_path.clone());
        if seen.contains(&canonical) {
            continue;
        }
        log_info(&format!("Found Steam installation: {}", full_path.display()));
        seen.push(canonical);
        installations.push(full_path);
    }

    installations
}

/// The Steam root itself plus every library listed in `libraryfolders.vdf`
pub fn library_folders(steam_path: &Path) -> Vec<PathBuf> {
    let mut folders = vec![steam_path.to_path_buf()];

    for vdf in ["steamapps/libraryfolders.vdf", "config/libraryfolders.vdf"] {
        let Ok(content) = fs::read_to_string(steam_path.join(vdf)) else {
            continue;
        };
        for path in parse_library_folders(&content) {
            let path = PathBuf::from(path);
            if path.exists() && !folders.contains(&path) {
                folders.push(path);
            }
        }
    }

    folders
}

/// Install directory of `app_id` inside one library, if fully installed.
///
/// Falls back to `steamapps/common/<folder_name>` when the manifest is
/// missing (libraries copied between machines often lose them).
pub fn find_in_library(library: &Path, app_id: &str, folder_name: &str) -> Option<PathBuf> {
    let steamapps = library.join("steamapps");
    let manifest_path = steamapps.join(format!("appmanifest_{}.acf", app_id));

    if let Ok(content) = fs::read_to_string(&manifest_path) {
        if let Some(manifest) = AppManifest::from_vdf(&content) {
            let install_path = steamapps.join("common").join(&manifest.install_dir);
            if manifest.app_id == app_id && manifest.is_installed() && install_path.is_dir() {
                return Some(install_path);
            }
        }
    }

    let fallback = steamapps.join("common").join(folder_name);
    fallback.is_dir().then_some(fallback)
}

/// Search every library of every Steam installation under `home`
pub fn find_game_install_path(home: &Path, app_id: &str, folder_name: &str) -> Option<PathBuf> {
    find_steam_installations(home)
        .iter()
        .flat_map(|steam| library_folders(steam))
        .find_map(|library| find_in_library(&library, app_id, folder_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn finds_game_through_secondary_library() {
        let home = tempfile::tempdir().unwrap();
        let library = tempfile::tempdir().unwrap();
        let steam = home.path().join(".local/share/Steam");

        write(
            &steam.join("steamapps/libraryfolders.vdf"),
            &format!(
                r#""libraryfolders" {{ "0" {{ "path" "{}" }} "1" {{ "path" "{}" }} }}"#,
                steam.display(),
                library.path().display()
            ),
        );
        write(
            &library.path().join("steamapps/appmanifest_2767030.acf"),
            r#""AppState" { "appid" "2767030" "StateFlags" "4" "installdir" "MarvelRivals" }"#,
        );
        fs::create_dir_all(library.path().join("steamapps/common/MarvelRivals")).unwrap();

        let found = find_game_install_path(home.path(), "2767030", "MarvelRivals").unwrap();
        assert_eq!(found, library.path().join("steamapps/common/MarvelRivals"));
    }

    #[test]
    fn falls_back_to_folder_name_without_manifest() {
        let library = tempfile::tempdir().unwrap();
        fs::create_dir_all(library.path().join("steamapps/common/MarvelRivals")).unwrap();
        assert_eq!(
            find_in_library(library.path(), "2767030", "MarvelRivals"),
            Some(library.path().join("steamapps/common/MarvelRivals"))
        );
    }

    #[test]
    fn manifest_for_another_app_is_ignored() {
        let library = tempfile::tempdir().unwrap();
        write(
            &library.path().join("steamapps/appmanifest_2767030.acf"),
            r#""AppState" { "appid" "440" "StateFlags" "4" "installdir" "Team Fortress 2" }"#,
        );
        fs::create_dir_all(library.path().join("steamapps/common/Team Fortress 2")).unwrap();

        assert_eq!(find_in_library(library.path(), "2767030", "MarvelRivals"), None);
    }

    #[test]
    fn nothing_found_without_steam() {
        let home = tempfile::tempdir().unwrap();
        assert!(find_steam_installations(home.path()).is_empty());
        assert!(find_game_install_path(home.path(), "2767030", "MarvelRivals").is_none());
    }
}
