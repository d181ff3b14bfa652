//! Enabling, disabling and uninstalling stored mods

use std::fs;

use super::{mod_name, ModHandler};
use crate::error::{ModError, Result};
use crate::logging::log_action;
use crate::utils::list_file_names;

impl ModHandler {
    /// Copy a stored mod into `~mods` so the game loads it.
    ///
    /// Enabling an already enabled mod rewrites the loaded copy from the store.
    pub fn enable_mod(&self, name: &str) -> Result<()> {
        let name = mod_name(name)?;
        let stored = self.stored(name);
        let content = fs::read(&stored)
            .map_err(|err| ModError::from_io(err, &format!("mod '{}'", name), &stored))?;

        fs::write(self.loaded(name), content)?;
        log_action(&format!("Enabled {}", name));
        Ok(())
    }

    /// Remove a mod's copy from `~mods`; the store keeps it
    pub fn disable_mod(&self, name: &str) -> Result<()> {
        let name = mod_name(name)?;
        let loaded = self.loaded(name);
        fs::remove_file(&loaded)
            .map_err(|err| ModError::from_io(err, &format!("enabled mod '{}'", name), &loaded))?;

        log_action(&format!("Disabled {}", name));
        Ok(())
    }

    /// Delete a mod from the store and from `~mods`, wherever it is present
    pub fn uninstall_mod(&self, name: &str) -> Result<()> {
        let name = mod_name(name)?;
        let in_store = list_file_names(&self.store_path())?.iter().any(|n| n == name);
        let in_loaded = list_file_names(&self.loaded_path)?.iter().any(|n| n == name);

        if !in_store && !in_loaded {
            return Err(ModError::ModDoesNotExist(name.to_string()));
        }
        if in_store {
            fs::remove_file(self.stored(name))?;
        }
        if in_loaded {
            fs::remove_file(self.loaded(name))?;
        }

        log_action(&format!("Uninstalled {}", name));
        Ok(())
    }

    pub fn enable_mods<S: AsRef<str>>(&self, names: &[S]) -> Result<()> {
        names.iter().try_for_each(|name| self.enable_mod(name.as_ref()))
    }

    pub fn disable_mods<S: AsRef<str>>(&self, names: &[S]) -> Result<()> {
        names.iter().try_for_each(|name| self.disable_mod(name.as_ref()))
    }

    pub fn uninstall_mods<S: AsRef<str>>(&self, names: &[S]) -> Result<()> {
        names.iter().try_for_each(|name| self.uninstall_mod(name.as_ref()))
    }
}
