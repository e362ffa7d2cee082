//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use crate::reading::Tokenization;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Reading-time tooling for the nnago blog
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: nnago.toml)
    #[arg(short = 'C', long, default_value = "nnago.toml")]
    pub config: PathBuf,

    /// Override the assumed reading speed, in words per minute
    #[arg(short, long, global = true)]
    pub wpm: Option<u64>,

    /// Override how text is split into words.
    ///
    /// `space` reproduces the blog's earlier estimates exactly, including
    /// the extra tokens produced by repeated spaces.
    #[arg(short, long, value_enum, global = true)]
    pub split: Option<Tokenization>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Estimate reading time of literal text (arguments are joined with spaces)
    Text {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Estimate reading time of files
    File {
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Skip the front matter block and count the body only
        #[arg(short, long)]
        body: bool,
    },

    /// Estimate reading time of every article in the content directory
    Scan {
        /// Content directory path (relative to project root)
        #[arg(short, long)]
        content: Option<PathBuf>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_text(&self) -> bool {
        matches!(self.command, Commands::Text { .. })
    }
    pub const fn is_file(&self) -> bool {
        matches!(self.command, Commands::File { .. })
    }
    pub const fn is_scan(&self) -> bool {
        matches!(self.command, Commands::Scan { .. })
    }
}
