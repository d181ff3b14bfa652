//! 7z archive reader

use std::io::Read;
use std::path::{Path, PathBuf};

use sevenz_rust::{Password, SevenZReader};

use super::{ArchiveEntry, ModArchive};
use crate::error::{ModError, Result};

pub struct SevenZModArchive {
    path: PathBuf,
}

impl SevenZModArchive {
    pub fn open(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    fn reader(&self) -> Result<SevenZReader<std::fs::File>> {
        Ok(SevenZReader::open(&self.path, Password::empty())?)
    }
}

impl ModArchive for SevenZModArchive {
    fn entries(&mut self) -> Result<Vec<ArchiveEntry>> {
        let reader = self.reader()?;
        Ok(reader
            .archive()
            .files
            .iter()
            .map(|file| ArchiveEntry::new(file.name(), file.is_directory()))
            .collect())
    }

    fn read_entry(&mut self, name: &str) -> Result<Vec<u8>> {
        let mut reader = self.reader()?;
        let mut found: Option<Vec<u8>> = None;

        // Solid blocks decode sequentially, so every entry before the match
        // is drained rather than skipped.
        reader.for_each_entries(|entry, data| {
            let mut content = Vec::new();
            data.read_to_end(&mut content)?;
            if !entry.is_directory() && ArchiveEntry::new(entry.name(), false).name == name {
                found = Some(content);
                return Ok(false);
            }
            Ok(true)
        })?;

        found.ok_or_else(|| ModError::not_found(format!("entry '{}' in archive", name), &self.path))
    }
}
