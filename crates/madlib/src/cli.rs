//! CLI command structure using clap

use clap::{Args, Parser, Subcommand};
use madlib_core::Variant;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "madlib")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Which madlib to load
///
/// Without either flag the source comes from MADLIB_FILE, MADLIB_VARIANT,
/// madlib.toml, and finally the builtin "short" madlib.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Builtin madlib to use (short or long)
    #[arg(long, conflicts_with = "file")]
    pub variant: Option<Variant>,

    /// Madlib TOML file to use instead of a builtin
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List builtin madlibs
    List {
        #[arg(long)]
        json: bool,
    },

    /// Show the input form for a madlib
    Form {
        #[command(flatten)]
        source: SourceArgs,

        #[arg(long)]
        json: bool,
    },

    /// Fill in a madlib from answers and generate the story
    Fill {
        #[command(flatten)]
        source: SourceArgs,

        /// TOML file with one `id = "value"` entry per filler
        #[arg(short, long)]
        answers: Option<PathBuf>,

        /// Answer for one filler, overrides the answers file
        #[arg(short, long = "set", value_name = "ID=VALUE")]
        set: Vec<String>,

        #[arg(long)]
        json: bool,
    },

    /// Fill in a madlib interactively
    Play {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Check a madlib file for mistakes
    Check {
        /// Madlib TOML file
        file: PathBuf,

        #[arg(long)]
        json: bool,
    },
}
