//! The hidden list: names excluded from the default listing

use std::collections::BTreeSet;
use std::fs;

use super::{mod_name, ModHandler};
use crate::error::{ModError, Result};
use crate::logging::log_action;

impl ModHandler {
    /// Read the hidden list. A missing file reads as empty.
    pub fn hidden_set(&self) -> Result<BTreeSet<String>> {
        let content = match fs::read_to_string(self.layout.hidden_file()) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeSet::new()),
            Err(err) => return Err(err.into()),
        };

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Hidden names, sorted
    pub fn hidden_mods(&self) -> Result<Vec<String>> {
        Ok(self.hidden_set()?.into_iter().collect())
    }

    fn write_hidden(&self, set: &BTreeSet<String>) -> Result<()> {
        let mut content = String::new();
        for name in set {
            content.push_str(name);
            content.push('\n');
        }
        fs::write(self.layout.hidden_file(), content)?;
        Ok(())
    }

    /// Add a name to the hidden list. Hiding a hidden name changes nothing.
    ///
    /// The name does not have to be in the store.
    pub fn hide_mod(&self, name: &str) -> Result<()> {
        let name = mod_name(name)?;
        let mut set = self.hidden_set()?;
        if set.insert(name.to_string()) {
            self.write_hidden(&set)?;
            log_action(&format!("Hid {}", name));
        }
        Ok(())
    }

    pub fn unhide_mod(&self, name: &str) -> Result<()> {
        let name = mod_name(name)?;
        let mut set = self.hidden_set()?;
        if !set.remove(name) {
            return Err(ModError::NotHidden(name.to_string()));
        }
        self.write_hidden(&set)?;
        log_action(&format!("Unhid {}", name));
        Ok(())
    }

    pub fn hide_mods<S: AsRef<str>>(&self, names: &[S]) -> Result<()> {
        names.iter().try_for_each(|name| self.hide_mod(name.as_ref()))
    }

    pub fn unhide_mods<S: AsRef<str>>(&self, names: &[S]) -> Result<()> {
        names.iter().try_for_each(|name| self.unhide_mod(name.as_ref()))
    }
}
