//! jeffm - Marvel Rivals mod manager
//!
//! Library crate holding the mod store, game detection and archive
//! handling. The `jeffm` binary is a thin command-line front end over
//! [`ModHandler`].

pub mod archive;
pub mod config;
pub mod error;
pub mod game_finder;
pub mod logging;
pub mod mods;
pub mod paths;
pub mod utils;

pub use error::{ModError, Result};
pub use game_finder::{FixedLocator, GameLocator, SteamLocator};
pub use mods::{ConflictPolicy, InstallOptions, ModHandler, ModStatus};
