//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Check whether binary trees are superbalanced: all leaf depths within one of each other
#[derive(Parser, Debug)]
#[command(name = "superbalanced")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Turn debugging information on (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Settings file (default: $XDG_CONFIG_HOME/superbalanced/superbalanced.toml)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check tree files for superbalance
    Check {
        /// TOML tree files
        #[arg(required = true, value_hint = ValueHint::FilePath)]
        files: Vec<PathBuf>,

        /// Render each tree before its verdict
        #[arg(short, long)]
        tree: bool,

        /// Only set the exit code, print nothing
        #[arg(short, long, conflicts_with = "tree")]
        quiet: bool,
    },

    /// Render a tree file with its leaf depths
    Show {
        /// TOML tree file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
