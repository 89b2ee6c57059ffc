//! Optimistics CLI - inspect and reset persisted shopper state.
//!
//! # Usage
//!
//! ```bash
//! # Print the session, cart and wishlist slots
//! opt-cli storage show
//!
//! # Use a different data directory
//! opt-cli storage show --data-dir /var/lib/optimistics
//!
//! # Remove one slot, or all of them
//! opt-cli storage clear --slot cart
//! opt-cli storage clear
//! ```
//!
//! The data directory defaults to `STOREFRONT_DATA_DIR` (or `.optimistics`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use optimistics_storefront::config::StorefrontConfig;
use optimistics_storefront::storage::FileStorage;

mod commands;

use commands::storage::Slot;

#[derive(Parser)]
#[command(name = "opt-cli")]
#[command(author, version, about = "Optimistics CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect or reset snapshot slots
    Storage {
        #[command(subcommand)]
        action: StorageAction,
    },
}

#[derive(Subcommand)]
enum StorageAction {
    /// Print every slot
    Show {
        /// Directory holding the slot files
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
    /// Remove slots
    Clear {
        /// Which slot to remove
        #[arg(long, value_enum, default_value = "all")]
        slot: Slot,

        /// Directory holding the slot files
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Storage { action } => match action {
            StorageAction::Show { data_dir } => {
                let storage = open_storage(data_dir)?;
                commands::storage::show(&storage, &mut std::io::stdout().lock())?;
            }
            StorageAction::Clear { slot, data_dir } => {
                let storage = open_storage(data_dir)?;
                commands::storage::clear(&storage, slot)?;
            }
        },
    }

    Ok(())
}

/// Open the slot directory, falling back to the storefront's configuration.
fn open_storage(data_dir: Option<PathBuf>) -> Result<FileStorage, Box<dyn std::error::Error>> {
    let dir = match data_dir {
        Some(dir) => dir,
        None => StorefrontConfig::from_env()?.data_dir,
    };
    Ok(FileStorage::open(dir)?)
}
