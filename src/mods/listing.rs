//! Store and profile listings

use walkdir::WalkDir;

use super::{ModHandler, ModStatus};
use crate::error::Result;
use crate::utils::{list_file_names, path_exists};

impl ModHandler {
    /// Every file name in the store, hidden ones included, in directory order
    pub fn raw_mods(&self) -> Result<Vec<String>> {
        Ok(list_file_names(&self.store_path())?)
    }

    /// Each stored mod with its enabled flag
    pub fn mods(&self) -> Result<Vec<ModStatus>> {
        let loaded = list_file_names(&self.loaded_path)?;
        Ok(self
            .raw_mods()?
            .into_iter()
            .map(|name| {
                let enabled = loaded.contains(&name);
                ModStatus { name, enabled }
            })
            .collect())
    }

    /// Like [`ModHandler::mods`] without the hidden names
    pub fn visible_mods(&self) -> Result<Vec<ModStatus>> {
        let hidden = self.hidden_set()?;
        Ok(self
            .mods()?
            .into_iter()
            .filter(|status| !hidden.contains(&status.name))
            .collect())
    }

    /// Names of the profile directories
    pub fn profiles(&self) -> Result<Vec<String>> {
        let dir = self.layout.profiles_dir();
        if !path_exists(&dir)? {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(std::io::Error::from)?;
            if entry.file_type().is_dir() {
                names.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}
