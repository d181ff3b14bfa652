//! TAR archive reader (plain or gzip-compressed)
//!
//! Tar streams can only be walked front to back, so every call reopens the
//! file and scans from the start.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use tar::Archive;

use super::{ArchiveEntry, ModArchive};
use crate::error::{ModError, Result};

pub struct TarModArchive {
    path: PathBuf,
    compressed: bool,
}

impl TarModArchive {
    pub fn open(path: &Path, compressed: bool) -> Self {
        Self {
            path: path.to_path_buf(),
            compressed,
        }
    }

    fn reader(&self) -> Result<Box<dyn Read>> {
        let file = File::open(&self.path).map_err(|e| ModError::from_io(e, "archive", &self.path))?;
        let file = BufReader::new(file);
        if self.compressed {
            Ok(Box::new(GzDecoder::new(file)))
        } else {
            Ok(Box::new(file))
        }
    }

    /// Walk entries until `visit` returns `Some`
    fn scan<T>(
        &self,
        mut visit: impl FnMut(ArchiveEntry, &mut dyn Read) -> Result<Option<T>>,
    ) -> Result<Option<T>> {
        let mut archive = Archive::new(self.reader()?);
        for entry in archive.entries()? {
            let mut entry = entry?;
            let is_dir = entry.header().entry_type().is_dir();
            let name = entry.path()?.to_string_lossy().to_string();
            if let Some(found) = visit(ArchiveEntry::new(name, is_dir), &mut entry)? {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }
}

impl ModArchive for TarModArchive {
    fn entries(&mut self) -> Result<Vec<ArchiveEntry>> {
        let mut entries = Vec::new();
        self.scan::<()>(|entry, _| {
            entries.push(entry);
            Ok(None)
        })?;
        Ok(entries)
    }

    fn read_entry(&mut self, name: &str) -> Result<Vec<u8>> {
        let found = self.scan(|entry, reader| {
            if entry.is_dir || entry.name != name {
                return Ok(None);
            }
            let mut content = Vec::new();
            reader.read_to_end(&mut content)?;
            Ok(Some(content))
        })?;

        found.ok_or_else(|| ModError::not_found(format!("entry '{}' in archive", name), &self.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn append<W: Write>(builder: &mut tar::Builder<W>, name: &str, data: &[u8]) {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder.append_data(&mut header, name, data).unwrap();
    }

    #[test]
    fn reads_plain_tar() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mod.tar");
        let mut builder = tar::Builder::new(File::create(&path).unwrap());
        append(&mut builder, "a.pak", b"pak a");
        append(&mut builder, "sub/c.pak", b"pak c");
        builder.finish().unwrap();
        drop(builder);

        let mut archive = TarModArchive::open(&path, false);
        let names: Vec<String> = archive.entries().unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["a.pak", "sub/c.pak"]);
        assert_eq!(archive.read_entry("sub/c.pak").unwrap(), b"pak c");
        assert!(archive.read_entry("nope.pak").unwrap_err().is_not_found());
    }

    #[test]
    fn reads_gzipped_tar() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mod.tar.gz");
        let encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        let mut builder = tar::Builder::new(encoder);
        append(&mut builder, "Cool.pak", b"cool");
        builder.into_inner().unwrap().finish().unwrap();

        let mut archive = TarModArchive::open(&path, true);
        assert_eq!(archive.entries().unwrap(), vec![ArchiveEntry::new("Cool.pak", false)]);
        assert_eq!(archive.read_entry("Cool.pak").unwrap(), b"cool");
    }
}
