//! Command line argument parsing for the Slangdex CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Slangdex - look up slang terms, their variants and related entries
#[derive(Parser, Debug, Clone)]
#[command(name = "slangdex")]
#[command(about = "Search a slang dictionary by spelling variants, relations and fuzzy matches")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SlangdexArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Dictionary entries file (JSON array); built-in sample data when omitted
    #[arg(long, value_name = "FILE", env = "SLANGDEX_ENTRIES", requires = "relationships")]
    pub entries: Option<PathBuf>,

    /// Relationship records file (JSON array)
    #[arg(long, value_name = "FILE", env = "SLANGDEX_RELATIONSHIPS", requires = "entries")]
    pub relationships: Option<PathBuf>,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "FILE", env = "SLANGDEX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SlangdexArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Expand a search term into every entry it should surface
    Expand(ExpandArgs),

    /// Prefix-first fuzzy search over entry keys
    Find(FindArgs),

    /// Autocomplete: fuzzy matches merged with expansion hits
    Suggest(SuggestArgs),

    /// Show an entry and its related entries
    Define(DefineArgs),

    /// Show lexicon statistics
    Stats,

    /// Report inconsistencies in the relationship data
    Validate,
}

/// Arguments for term expansion
#[derive(Parser, Debug, Clone)]
pub struct ExpandArgs {
    /// Search term
    #[arg(value_name = "TERM")]
    pub term: String,
}

/// Arguments for fuzzy search
#[derive(Parser, Debug, Clone)]
pub struct FindArgs {
    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Maximum number of fuzzy results (prefix matches are not capped)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Only keep entries with this part of speech
    #[arg(long = "pos", value_name = "PART_OF_SPEECH")]
    pub part_of_speech: Option<String>,

    /// Override the fuzzy score threshold
    #[arg(long)]
    pub threshold: Option<f64>,
}

/// Arguments for autocomplete
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Partial input
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Maximum number of fuzzy results
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for entry display
#[derive(Parser, Debug, Clone)]
pub struct DefineArgs {
    /// Entry key or any known variant
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Also print the prompt an explanation request would carry
    #[arg(long)]
    pub prompt: bool,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output (for list results)
    Csv,
}
