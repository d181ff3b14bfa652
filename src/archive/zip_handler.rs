//! ZIP archive reader

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use zip::ZipArchive;

use super::{ArchiveEntry, ModArchive};
use crate::error::{ModError, Result};

pub struct ZipModArchive {
    path: PathBuf,
    archive: ZipArchive<BufReader<File>>,
}

impl ZipModArchive {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| ModError::from_io(e, "archive", path))?;
        let archive = ZipArchive::new(BufReader::new(file))?;
        Ok(Self {
            path: path.to_path_buf(),
            archive,
        })
    }
}

impl ModArchive for ZipModArchive {
    fn entries(&mut self) -> Result<Vec<ArchiveEntry>> {
        let mut entries = Vec::with_capacity(self.archive.len());
        for index in 0..self.archive.len() {
            let file = self.archive.by_index_raw(index)?;
            entries.push(ArchiveEntry::new(file.name(), file.is_dir()));
        }
        Ok(entries)
    }

    fn read_entry(&mut self, name: &str) -> Result<Vec<u8>> {
        for index in 0..self.archive.len() {
            let matches = {
                let file = self.archive.by_index_raw(index)?;
                ArchiveEntry::new(file.name(), file.is_dir()).name == name
            };
            if !matches {
                continue;
            }

            let mut file = self.archive.by_index(index)?;
            let mut content = Vec::new();
            file.read_to_end(&mut content)?;
            return Ok(content);
        }

        Err(ModError::not_found(format!("entry '{}' in archive", name), &self.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    #[test]
    fn lists_and_reads_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mod.zip");
        let mut writer = ZipWriter::new(File::create(&path).unwrap());
        writer.add_directory("sub/", SimpleFileOptions::default()).unwrap();
        writer.start_file("sub/c.pak", SimpleFileOptions::default()).unwrap();
        writer.write_all(b"pak c").unwrap();
        writer.start_file("b.txt", SimpleFileOptions::default()).unwrap();
        writer.write_all(b"readme").unwrap();
        writer.finish().unwrap();

        let mut archive = ZipModArchive::open(&path).unwrap();
        let entries = archive.entries().unwrap();
        assert_eq!(
            entries,
            vec![
                ArchiveEntry::new("sub/", true),
                ArchiveEntry::new("sub/c.pak", false),
                ArchiveEntry::new("b.txt", false),
            ]
        );
        assert_eq!(archive.read_entry("sub/c.pak").unwrap(), b"pak c");
        assert!(archive.read_entry("missing.pak").unwrap_err().is_not_found());
    }
}
