use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::ColorChoice;

#[derive(Parser)]
#[command(
    name = "weave",
    about = "Patience diff and n-way merge for text files",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Reject inputs with more lines than this (overrides the config file)
    #[arg(long, global = true)]
    pub max_lines: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show line differences between two files
    Diff(DiffArgs),
    /// Merge several edited versions of a file into one
    Merge(MergeArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    /// The original file, or `-` for stdin
    pub old: PathBuf,
    /// The changed file, or `-` for stdin
    pub new: PathBuf,
    #[arg(long)]
    pub color: Option<ColorChoice>,
    /// Print a summary line after the diff
    #[arg(long)]
    pub stat: bool,
}

#[derive(Args)]
pub struct MergeArgs {
    /// The common original, or `-` for stdin
    pub original: PathBuf,
    /// Edited versions of the original
    #[arg(required = true)]
    pub versions: Vec<PathBuf>,
    /// Write the result here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
