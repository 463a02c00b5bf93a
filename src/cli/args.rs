//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::config::OutputFormat;

/// Extract guess and outcome histories from rendered multi-board word-puzzle snapshots
#[derive(Parser, Debug)]
#[command(name = "gridread")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Directory holding a local .gridread.toml (default: cwd)
    #[arg(
        short = 'C',
        long,
        global = true,
        env = "GRIDREAD_CONFIG_DIR",
        value_hint = ValueHint::DirPath
    )]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract board histories from a snapshot ("-" reads stdin)
    Extract {
        /// Snapshot JSON file
        #[arg(value_hint = ValueHint::FilePath)]
        snapshot: PathBuf,
        /// Output format (default from config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
        /// Merge boards into one shared guess history
        #[arg(short, long)]
        merged: bool,
    },

    /// Show snapshot as tree
    Tree {
        /// Snapshot JSON file
        #[arg(value_hint = ValueHint::FilePath)]
        snapshot: PathBuf,
    },

    /// Show outcome per style class
    Classes {
        /// Snapshot JSON file
        #[arg(value_hint = ValueHint::FilePath)]
        snapshot: PathBuf,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init {
        /// Create global config
        #[arg(short, long)]
        global: bool,
    },

    /// Show config paths
    Path,
}
