//! Error taxonomy for mod management
//!
//! Logical-state failures (a mod that is not hidden, a file that cannot be
//! installed) get their own variants. Underlying I/O, config and archive
//! failures are carried through unchanged.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = ModError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ModError {
    /// A referenced mod, directory or config file is absent
    #[error("{what} not found: {}", .path.display())]
    NotFound { what: String, path: PathBuf },

    #[error("'{0}' is not an installable file")]
    NotInstallable(String),

    #[error("mod '{0}' does not exist")]
    ModDoesNotExist(String),

    #[error("mod '{0}' is not hidden")]
    NotHidden(String),

    #[error("mod '{0}' is already installed")]
    AlreadyInstalled(String),

    /// The configured install root has no Paks folder
    #[error(
        "Marvel Rivals is not installed at {}, please install it to use jeffm",
        .0.display()
    )]
    GameNotInstalled(PathBuf),

    #[error("unable to find the Marvel Rivals folder")]
    GameNotFound,

    #[error("unable to resolve the user's home directory")]
    HomeDirUnavailable,

    #[error("archive format not supported by this build: {0}")]
    UnsupportedArchive(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("invalid config file: {0}")]
    ConfigDecode(#[from] toml::de::Error),

    #[error("failed to encode config file: {0}")]
    ConfigEncode(#[from] toml::ser::Error),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("7z error: {0}")]
    SevenZ(#[from] sevenz_rust::Error),

    #[cfg(feature = "rar")]
    #[error("rar error: {0}")]
    Rar(#[from] unrar::error::UnrarError),
}

impl ModError {
    pub fn not_found(what: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        ModError::NotFound {
            what: what.into(),
            path: path.into(),
        }
    }

    /// Convert an I/O error into `NotFound` when the OS reports a missing file.
    ///
    /// Matches on `io::ErrorKind`, so the check holds on every platform and locale.
    pub fn from_io(err: io::Error, what: &str, path: impl Into<PathBuf>) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            ModError::not_found(what, path)
        } else {
            ModError::Io(err)
        }
    }

    pub fn is_not_found(&self) -> bool {
        match self {
            ModError::NotFound { .. } => true,
            ModError::Io(err) => err.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
