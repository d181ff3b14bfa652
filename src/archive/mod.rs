//! Archive readers
//!
//! Every supported format is exposed through the same small capability:
//! list the entries, then read an entry by name. The install pipeline only
//! branches on format once, in [`open`].

mod sevenz_handler;
mod tar_handler;
mod zip_handler;

#[cfg(feature = "rar")]
mod rar_handler;

use std::path::Path;

use crate::error::{ModError, Result};
use crate::utils::base_name;

pub use sevenz_handler::SevenZModArchive;
pub use tar_handler::TarModArchive;
pub use zip_handler::ZipModArchive;

#[cfg(feature = "rar")]
pub use rar_handler::RarModArchive;

/// One entry of an archive listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Full name inside the archive, `/` separated
    pub name: String,
    pub is_dir: bool,
}

impl ArchiveEntry {
    pub fn new(name: impl Into<String>, is_dir: bool) -> Self {
        let name = name.into().replace('\\', "/");
        let is_dir = is_dir || name.ends_with('/');
        Self { name, is_dir }
    }

    pub fn base_name(&self) -> &str {
        base_name(self.name.trim_end_matches('/'))
    }
}

pub trait ModArchive {
    /// Entries in archive-listing order
    fn entries(&mut self) -> Result<Vec<ArchiveEntry>>;

    /// Full contents of the named entry
    fn read_entry(&mut self, name: &str) -> Result<Vec<u8>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    Zip,
    SevenZ,
    Rar,
    Tar,
    TarGz,
}

impl ArchiveKind {
    /// Detect from the file name, case-insensitively
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().to_ascii_lowercase();

        if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
            return Some(ArchiveKind::TarGz);
        }

        match name.rsplit_once('.')?.1 {
            "zip" => Some(ArchiveKind::Zip),
            "7z" => Some(ArchiveKind::SevenZ),
            "rar" => Some(ArchiveKind::Rar),
            "tar" => Some(ArchiveKind::Tar),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ArchiveKind::Zip => "zip",
            ArchiveKind::SevenZ => "7z",
            ArchiveKind::Rar => "rar",
            ArchiveKind::Tar => "tar",
            ArchiveKind::TarGz => "tar.gz",
        }
    }
}

/// Open `path` with the reader for `kind`
pub fn open(path: &Path, kind: ArchiveKind) -> Result<Box<dyn ModArchive>> {
    if !path.is_file() {
        return Err(ModError::not_found("archive", path));
    }

    match kind {
        ArchiveKind::Zip => Ok(Box::new(ZipModArchive::open(path)?)),
        ArchiveKind::SevenZ => Ok(Box::new(SevenZModArchive::open(path))),
        ArchiveKind::Tar => Ok(Box::new(TarModArchive::open(path, false))),
        ArchiveKind::TarGz => Ok(Box::new(TarModArchive::open(path, true))),
        #[cfg(feature = "rar")]
        ArchiveKind::Rar => Ok(Box::new(RarModArchive::open(path))),
        #[cfg(not(feature = "rar"))]
        ArchiveKind::Rar => Err(ModError::UnsupportedArchive(kind.label().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_detection() {
        assert_eq!(ArchiveKind::from_path(Path::new("Mod.ZIP")), Some(ArchiveKind::Zip));
        assert_eq!(ArchiveKind::from_path(Path::new("a/b/Mod.7z")), Some(ArchiveKind::SevenZ));
        assert_eq!(ArchiveKind::from_path(Path::new("Mod.rar")), Some(ArchiveKind::Rar));
        assert_eq!(ArchiveKind::from_path(Path::new("Mod.tar")), Some(ArchiveKind::Tar));
        assert_eq!(ArchiveKind::from_path(Path::new("Mod.tar.gz")), Some(ArchiveKind::TarGz));
        assert_eq!(ArchiveKind::from_path(Path::new("Mod.tgz")), Some(ArchiveKind::TarGz));
        assert_eq!(ArchiveKind::from_path(Path::new("Mod.pak")), None);
        assert_eq!(ArchiveKind::from_path(Path::new("Mod")), None);
    }

    #[test]
    fn entry_names_are_normalized() {
        let entry = ArchiveEntry::new(r"Mods\Cool_P.pak", false);
        assert_eq!(entry.name, "Mods/Cool_P.pak");
        assert_eq!(entry.base_name(), "Cool_P.pak");

        let dir = ArchiveEntry::new("Mods/", false);
        assert!(dir.is_dir);
        assert_eq!(dir.base_name(), "Mods");
    }

    #[test]
    fn opening_missing_archive_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = open(&dir.path().join("missing.zip"), ArchiveKind::Zip).err().unwrap();
        assert!(err.is_not_found());
    }
}
