//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

/// leafwalk - print the leaves of nested JSON forests
#[derive(Parser)]
#[command(name = "leafwalk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every leaf of a forest, in walk order
    ///
    /// Arrays and objects may nest at most 1024 levels deep.
    Walk {
        /// Input file (reads stdin when absent or `-`)
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Prefix each leaf with the keys of its enclosing mappings
        #[arg(long)]
        full_paths: bool,

        /// Separator used between keys with --full-paths
        #[arg(long)]
        separator: Option<String>,

        /// Print only the number of leaves
        #[arg(long)]
        count: bool,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}
