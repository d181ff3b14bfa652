//! jeffm - Marvel Rivals mod manager
//!
//! Command-line front end: every subcommand maps onto one `ModHandler` call.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use jeffm::logging::{init_logger, log_error, log_info};
use jeffm::paths::AppLayout;
use jeffm::{ConflictPolicy, InstallOptions, ModHandler, ModStatus, Result};

#[derive(Parser)]
#[command(name = "jeffm", version, about = "Marvel Rivals mod manager")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Echo log lines to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Install .pak files or archives containing them
    Install {
        /// Replace mods that are already in the store
        #[arg(long, conflicts_with = "fail_if_exists")]
        overwrite: bool,
        /// Stop when a mod is already in the store
        #[arg(long)]
        fail_if_exists: bool,
        /// Don't print installed file names
        #[arg(long, short)]
        quiet: bool,
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Remove mods from the store and the game folder
    Uninstall {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Copy stored mods into the game's ~mods folder
    Enable {
        /// Enable every stored mod, hidden ones included
        #[arg(long, conflicts_with = "names")]
        all: bool,
        #[arg(required_unless_present = "all")]
        names: Vec<String>,
    },
    /// Remove mods from the game's ~mods folder
    Disable {
        /// Disable every enabled mod
        #[arg(long, conflicts_with = "names")]
        all: bool,
        #[arg(required_unless_present = "all")]
        names: Vec<String>,
    },
    /// Hide mods from `list`
    Hide {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Show hidden mods in `list` again
    Unhide {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// List hidden mods
    Hidden,
    /// List installed mods
    List {
        /// Include hidden mods
        #[arg(long)]
        all: bool,
    },
    /// Mod profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Print the store, config and game folders
    Paths,
}

#[derive(Subcommand)]
enum ProfileAction {
    /// List available profiles
    List,
}

const GREEN: &str = "\x1b[92m";
const RED: &str = "\x1b[91m";
const RESET: &str = "\x1b[0m";

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(home) = dirs::home_dir() {
        init_logger(&AppLayout::new(&home).logs_dir(), cli.verbose);
    }
    log_info(&format!("jeffm {} starting", env!("CARGO_PKG_VERSION")));

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log_error(&err.to_string());
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    let handler = ModHandler::from_env()?;

    match command {
        Command::Install {
            overwrite,
            fail_if_exists,
            quiet,
            paths,
        } => {
            let policy = if overwrite {
                ConflictPolicy::Overwrite
            } else if fail_if_exists {
                ConflictPolicy::ErrorIfExists
            } else {
                ConflictPolicy::SkipIfExists
            };
            let options = InstallOptions {
                policy,
                print_installs: !quiet,
            };
            handler.install_mods(&paths, &options)?;
        }
        Command::Uninstall { names } => handler.uninstall_mods(&names)?,
        Command::Enable { all, names } => {
            let names = if all { handler.raw_mods()? } else { names };
            handler.enable_mods(&names)?;
        }
        Command::Disable { all, names } => {
            let names = if all { enabled_names(&handler)? } else { names };
            handler.disable_mods(&names)?;
        }
        Command::Hide { names } => handler.hide_mods(&names)?,
        Command::Unhide { names } => handler.unhide_mods(&names)?,
        Command::Hidden => {
            let hidden = handler.hidden_mods()?;
            println!("{} mods currently hidden:", hidden.len());
            for name in hidden {
                println!("  {}", name);
            }
        }
        Command::List { all } => {
            let mods = if all { handler.mods()? } else { handler.visible_mods()? };
            println!("{} mods currently installed:", mods.len());
            for status in &mods {
                print_status(status);
            }
        }
        Command::Profile {
            action: ProfileAction::List,
        } => {
            let profiles = handler.profiles()?;
            println!("{} profiles available:", profiles.len());
            for name in profiles {
                println!("  {}", name);
            }
        }
        Command::Paths => {
            let layout = handler.layout();
            println!("home:    {}", handler.home_path().display());
            println!("config:  {}", layout.config_file().display());
            println!("store:   {}", layout.store_dir().display());
            println!("hidden:  {}", layout.hidden_file().display());
            println!("game:    {}", handler.install_path().display());
            println!("loaded:  {}", handler.loaded_path().display());
        }
    }

    Ok(())
}

/// Stored mods that are currently enabled
fn enabled_names(handler: &ModHandler) -> Result<Vec<String>> {
    Ok(handler
        .mods()?
        .into_iter()
        .filter(|status| status.enabled)
        .map(|status| status.name)
        .collect())
}

fn print_status(status: &ModStatus) {
    let color = if status.enabled { GREEN } else { RED };
    println!("  {}{}{}", color, status, RESET);
}
