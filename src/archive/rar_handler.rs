//! RAR archive reader (bundled unrar library)

use std::path::{Path, PathBuf};

use unrar::Archive;

use super::{ArchiveEntry, ModArchive};
use crate::error::{ModError, Result};

pub struct RarModArchive {
    path: PathBuf,
}

impl RarModArchive {
    pub fn open(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl ModArchive for RarModArchive {
    fn entries(&mut self) -> Result<Vec<ArchiveEntry>> {
        let listing = Archive::new(&self.path).open_for_listing()?;
        let mut entries = Vec::new();
        for header in listing {
            let header = header?;
            entries.push(ArchiveEntry::new(
                header.filename.to_string_lossy().to_string(),
                header.is_directory(),
            ));
        }
        Ok(entries)
    }

    fn read_entry(&mut self, name: &str) -> Result<Vec<u8>> {
        let mut archive = Archive::new(&self.path).open_for_processing()?;

        while let Some(cursor) = archive.read_header()? {
            let entry_name = cursor.entry().filename.to_string_lossy().to_string();
            let is_dir = cursor.entry().is_directory();
            if !is_dir && ArchiveEntry::new(entry_name, false).name == name {
                let (content, _rest) = cursor.read()?;
                return Ok(content);
            }
            archive = cursor.skip()?;
        }

        Err(ModError::not_found(format!("entry '{}' in archive", name), &self.path))
    }
}
