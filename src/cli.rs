//! Command-line interface definitions for addonman.
//!
//! This module contains all CLI argument parsing structures using clap's derive macros.
//! The CLI definitions are shared between the main binary and build tools (like xtask)
//! for man page generation.
//!
//! Note: Field-level documentation is provided via clap doc comments,
//! so we allow missing_docs for this module to avoid redundant documentation.

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use crate::pack::{PackCategory, PackId};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Main CLI structure for addonman.
#[derive(Parser)]
#[command(
    name = "addon",
    version = crate::VERSION,
    about = "Resource and behavior pack manager for Bedrock dedicated servers",
    long_about = "Enables, disables, reorders and deletes the add-on packs of a Bedrock dedicated server world"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Show verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress informational messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// World folder (the one containing level.dat)
    #[arg(long, global = true, value_name = "DIR")]
    pub world: Option<PathBuf>,

    /// Resource pack folder, detected from the world when omitted
    #[arg(long, global = true, value_name = "DIR")]
    pub resource_packs: Option<PathBuf>,

    /// Behavior pack folder, detected from the world when omitted
    #[arg(long, global = true, value_name = "DIR")]
    pub behavior_packs: Option<PathBuf>,
}

/// Pack category as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    /// Resource packs
    #[value(alias = "rp")]
    Resource,
    /// Behavior packs
    #[value(alias = "bp")]
    Behavior,
}

impl From<CategoryArg> for PackCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Resource => Self::Resource,
            CategoryArg::Behavior => Self::Behavior,
        }
    }
}

/// Where `move` puts a pack.
#[derive(Debug, Clone, Copy, Args)]
#[group(required = true, multiple = false)]
pub struct MoveTarget {
    /// Move one place towards the top (loaded earlier)
    #[arg(long)]
    pub up: bool,

    /// Move one place towards the bottom
    #[arg(long)]
    pub down: bool,

    /// Move to this position (0 is the top)
    #[arg(long, value_name = "INDEX")]
    pub to: Option<usize>,
}

/// All available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the world, its pack folders and pack counts
    Status,

    /// List installed packs
    List {
        /// Only list this category
        #[arg(value_enum)]
        category: Option<CategoryArg>,

        /// Only list enabled packs
        #[arg(long, conflicts_with = "inactive")]
        active: bool,

        /// Only list disabled packs
        #[arg(long)]
        inactive: bool,

        /// Include the built-in vanilla and education packs
        #[arg(short, long)]
        all: bool,
    },

    /// Show details of one pack
    Show {
        /// Pack uuid
        id: PackId,
    },

    /// Enable packs, adding them to the end of the load order
    Enable {
        #[arg(value_enum)]
        category: CategoryArg,

        /// Pack uuids
        #[arg(required = true)]
        ids: Vec<PackId>,
    },

    /// Disable packs
    Disable {
        #[arg(value_enum)]
        category: CategoryArg,

        /// Pack uuids
        #[arg(required = true)]
        ids: Vec<PackId>,
    },

    /// Change the load order of an enabled pack
    Move {
        #[arg(value_enum)]
        category: CategoryArg,

        /// Pack uuid
        id: PackId,

        #[command(flatten)]
        target: MoveTarget,
    },

    /// Delete a pack folder from the server
    Delete {
        #[arg(value_enum)]
        category: CategoryArg,

        /// Pack uuid
        id: PackId,

        /// Actually delete (without it, only show what would be removed)
        #[arg(short, long)]
        yes: bool,
    },

    /// Print the pack folders detected for a world
    Detect {
        /// World folder
        world: PathBuf,
    },

    /// Get and set configuration options
    Config {
        /// Configuration key
        key: Option<String>,

        /// Configuration value to set
        value: Option<String>,

        /// Unset the configuration key
        #[arg(long)]
        unset: bool,

        /// List all configuration values
        #[arg(short, long)]
        list: bool,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
