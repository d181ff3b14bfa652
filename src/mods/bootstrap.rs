//! First-run setup and load-folder reconciliation

use std::fs;
use std::path::Path;

use super::ModHandler;
use crate::config::Config;
use crate::error::{ModError, Result};
use crate::game_finder::GameLocator;
use crate::logging::{log_info, log_install};
use crate::paths::{loaded_dir, paks_dir, AppLayout};
use crate::utils::{create_dir_if_missing, list_dir_names, list_file_names, path_exists};

impl ModHandler {
    /// Prepare the app folder under `home` and open a handler on it.
    ///
    /// `locator` is only consulted when no config file exists yet. Files
    /// already sitting in the game's `~mods` folder are imported into the
    /// store before this returns.
    pub fn new(home: &Path, locator: &dyn GameLocator) -> Result<Self> {
        let layout = AppLayout::new(home);
        verify_app_folder(&layout, locator)?;

        let config = Config::load(&layout.config_file())?;
        let install_path = config.install_path;
        let loaded_path = loaded_dir(&install_path);
        ensure_loaded_dir(&install_path)?;

        let handler = Self {
            install_path,
            home_path: home.to_path_buf(),
            layout,
            loaded_path,
        };
        handler.reconcile()?;
        Ok(handler)
    }

    /// Copy every file in `~mods` that the store lacks into the store.
    ///
    /// Returns the imported names. Safe to run repeatedly; visibility is
    /// left untouched.
    pub fn reconcile(&self) -> Result<Vec<String>> {
        let mut imported = Vec::new();

        for name in list_file_names(&self.loaded_path)? {
            let stored = self.stored(&name);
            if path_exists(&stored)? {
                continue;
            }
            fs::copy(self.loaded(&name), &stored)?;
            log_install(&format!("Imported {} from the game's mod folder", name));
            imported.push(name);
        }

        Ok(imported)
    }
}

/// Initialise the app folder when it is missing, near-empty or incomplete
fn verify_app_folder(layout: &AppLayout, locator: &dyn GameLocator) -> Result<()> {
    let root = layout.root();
    let needs_init = if !path_exists(root)? {
        true
    } else {
        list_dir_names(root)?.len() < 2
            || !path_exists(&layout.config_file())?
            || !path_exists(&layout.store_dir())?
            || !path_exists(&layout.hidden_file())?
            || !path_exists(&layout.profiles_dir())?
    };

    if needs_init {
        init_app_folder(layout, locator)?;
    }
    Ok(())
}

fn init_app_folder(layout: &AppLayout, locator: &dyn GameLocator) -> Result<()> {
    if create_dir_if_missing(layout.root())? {
        log_info(&format!("Created {}", layout.root().display()));
    }

    let config_file = layout.config_file();
    if !path_exists(&config_file)? {
        let install_path = locator.resolve_install_path()?;
        if !path_exists(&paks_dir(&install_path))? {
            return Err(ModError::GameNotInstalled(install_path));
        }

        Config::new(&install_path).save(&config_file)?;
        log_info(&format!("Wrote {} (install at {})", config_file.display(), install_path.display()));

        create_dir_if_missing(&loaded_dir(&install_path))?;
    }

    create_dir_if_missing(&layout.store_dir())?;
    create_dir_if_missing(&layout.profiles_dir())?;

    let hidden_file = layout.hidden_file();
    if !path_exists(&hidden_file)? {
        fs::write(&hidden_file, "")?;
    }

    Ok(())
}

/// Create `~mods` when the game is installed but the folder is missing
fn ensure_loaded_dir(install_path: &Path) -> Result<()> {
    let loaded = loaded_dir(install_path);
    if path_exists(&loaded)? {
        return Ok(());
    }

    if !path_exists(&paks_dir(install_path))? {
        return Err(ModError::GameNotInstalled(install_path.to_path_buf()));
    }

    fs::create_dir(&loaded)?;
    log_info(&format!("Created {}", loaded.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::game_finder::FixedLocator;
    use crate::mods::testing::{files_in, Fixture};

    #[test]
    fn first_run_creates_layout() {
        let fx = Fixture::new();
        let handler = fx.handler();
        let layout = handler.layout();

        assert!(layout.store_dir().is_dir());
        assert!(layout.profiles_dir().is_dir());
        assert_eq!(fs::read_to_string(layout.hidden_file()).unwrap(), "");
        assert!(handler.loaded_path().is_dir());
        assert_eq!(
            Config::load(&layout.config_file()).unwrap().install_path,
            fx.game.path()
        );
    }

    #[test]
    fn missing_game_is_reported() {
        let home = tempfile::tempdir().unwrap();
        let game = tempfile::tempdir().unwrap();
        let err = ModHandler::new(home.path(), &FixedLocator(game.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, ModError::GameNotInstalled(path) if path == game.path()));
    }

    #[test]
    fn missing_loaded_dir_is_recreated() {
        let fx = Fixture::new();
        let handler = fx.handler();
        fs::remove_dir(handler.loaded_path()).unwrap();

        let handler = fx.handler();
        assert!(handler.loaded_path().is_dir());
    }

    #[test]
    fn uninstalled_game_after_setup_is_reported() {
        let fx = Fixture::new();
        fx.handler();
        fs::remove_dir_all(paks_dir(fx.game.path())).unwrap();

        let err = ModHandler::new(fx.home.path(), &fx.locator()).unwrap_err();
        assert!(matches!(err, ModError::GameNotInstalled(_)));
    }

    #[test]
    fn existing_config_skips_locator() {
        struct Refuse;
        impl GameLocator for Refuse {
            fn resolve_install_path(&self) -> Result<std::path::PathBuf> {
                Err(ModError::GameNotFound)
            }
        }

        let fx = Fixture::new();
        fx.handler();
        assert!(ModHandler::new(fx.home.path(), &Refuse).is_ok());
    }

    #[test]
    fn startup_imports_loaded_files() {
        let fx = Fixture::new();
        let loaded = loaded_dir(fx.game.path());
        fs::create_dir_all(&loaded).unwrap();
        fs::write(loaded.join("Manual.pak"), b"dropped by hand").unwrap();
        fs::create_dir(loaded.join("NotAMod")).unwrap();

        let handler = fx.handler();
        assert_eq!(files_in(&handler.store_path()), vec!["Manual.pak"]);
        assert_eq!(
            fs::read(handler.store_path().join("Manual.pak")).unwrap(),
            b"dropped by hand"
        );
        assert!(handler.mods().unwrap()[0].enabled);
        assert!(handler.hidden_mods().unwrap().is_empty());
    }

    #[test]
    fn reconciliation_is_idempotent() {
        let fx = Fixture::new();
        let handler = fx.handler();
        fs::write(handler.loaded_path().join("A.pak"), b"a").unwrap();

        assert_eq!(handler.reconcile().unwrap(), vec!["A.pak"]);
        let store_once = files_in(&handler.store_path());
        let loaded_once = files_in(handler.loaded_path());

        assert!(handler.reconcile().unwrap().is_empty());
        assert_eq!(files_in(&handler.store_path()), store_once);
        assert_eq!(files_in(handler.loaded_path()), loaded_once);
    }

    #[test]
    fn reconciliation_keeps_existing_store_copy() {
        let fx = Fixture::new();
        let handler = fx.handler();
        fs::write(handler.store_path().join("A.pak"), b"store").unwrap();
        fs::write(handler.loaded_path().join("A.pak"), b"loaded").unwrap();

        handler.reconcile().unwrap();
        assert_eq!(fs::read(handler.store_path().join("A.pak")).unwrap(), b"store");
    }
}
