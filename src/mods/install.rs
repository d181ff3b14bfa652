//! Installing mod files and archives into the store

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use super::{ConflictPolicy, InstallOptions, ModHandler};
use crate::archive::{self, ArchiveKind};
use crate::error::{ModError, Result};
use crate::logging::{log_action, log_install, log_warning};
use crate::paths::MOD_EXTENSION;
use crate::utils::{extension_lower, path_exists, same_file};

fn is_mod_file(name: &str) -> bool {
    extension_lower(name).as_deref() == Some(MOD_EXTENSION)
}

/// One line per file written to the store
fn announce(out: &mut impl Write, name: &str) -> io::Result<()> {
    writeln!(out, "Installed {}", name)
}

impl ModHandler {
    /// Install each path in order, stopping at the first failure.
    ///
    /// Files installed before the failure stay in the store.
    pub fn install_mods<P: AsRef<Path>>(
        &self,
        paths: &[P],
        options: &InstallOptions,
    ) -> Result<Vec<String>> {
        let mut installed = Vec::new();
        for path in paths {
            installed.extend(self.install_mod(path.as_ref(), options)?);
        }
        Ok(installed)
    }

    /// Install a `.pak` file or every `.pak` inside an archive.
    ///
    /// Returns the store names that were written; names skipped under
    /// [`ConflictPolicy::SkipIfExists`] are left out.
    pub fn install_mod(&self, path: &Path, options: &InstallOptions) -> Result<Vec<String>> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .ok_or_else(|| ModError::NotInstallable(path.display().to_string()))?;

        log_action(&format!("Installing {}", path.display()));

        if is_mod_file(&file_name) {
            if !path.is_file() {
                return Err(ModError::not_found("mod file", path));
            }
            let dest = self.stored(&file_name);
            if path_exists(&dest)? && same_file(path, &dest)? {
                if options.policy == ConflictPolicy::ErrorIfExists {
                    return Err(ModError::AlreadyInstalled(file_name));
                }
                log_install(&format!("{} is already the stored copy", file_name));
                return Ok(Vec::new());
            }
            let written = self.store_entry(&file_name, options, |dest| {
                fs::copy(path, dest)?;
                Ok(())
            })?;
            return Ok(written.then_some(file_name).into_iter().collect());
        }

        let Some(kind) = ArchiveKind::from_path(path) else {
            return Err(ModError::NotInstallable(file_name));
        };

        let mut archive = archive::open(path, kind)?;
        let mut installed = Vec::new();

        for entry in archive.entries()? {
            if entry.is_dir || !is_mod_file(&entry.name) {
                continue;
            }
            let name = entry.base_name().to_string();
            let written = self.store_entry(&name, options, |dest| {
                let content = archive.read_entry(&entry.name)?;
                fs::write(dest, content)?;
                Ok(())
            })?;
            if written {
                installed.push(name);
            }
        }

        if installed.is_empty() {
            log_warning(&format!("No new .{} files installed from {}", MOD_EXTENSION, file_name));
        }
        Ok(installed)
    }

    /// Apply the conflict policy for `name`, then let `write` fill the store path
    fn store_entry(
        &self,
        name: &str,
        options: &InstallOptions,
        write: impl FnOnce(&Path) -> Result<()>,
    ) -> Result<bool> {
        let dest = self.stored(name);

        if path_exists(&dest)? {
            match options.policy {
                ConflictPolicy::Overwrite => {}
                ConflictPolicy::SkipIfExists => {
                    log_install(&format!("{} already installed, keeping stored copy", name));
                    return Ok(false);
                }
                ConflictPolicy::ErrorIfExists => {
                    return Err(ModError::AlreadyInstalled(name.to_string()));
                }
            }
        }

        write(&dest)?;
        log_install(&format!("Installed {}", name));
        if options.print_installs {
            announce(&mut io::stdout().lock(), name)?;
        }
        Ok(true)
    }
}
