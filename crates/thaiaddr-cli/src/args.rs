use clap::{Parser, Subcommand};
use std::path::PathBuf;
use thaiaddr_core::traits::DEFAULT_SUGGESTION_LIMIT;
use thaiaddr_core::{AreaCode, Locale};

/// CLI arguments for thaiaddr-cli
#[derive(Debug, Parser)]
#[command(
    name = "thaiaddr",
    version,
    about = "Inspect the Thai postal reference table and replay address-form sessions"
)]
pub struct CliArgs {
    /// Reference table (JSON, JSON.gz or a `.bin` image). Defaults to the bundled sample.
    #[arg(short = 'i', long = "input", env = "THAIADDR_DATA", global = true)]
    pub input: Option<PathBuf>,

    /// Display locale for names: th or en
    #[arg(short = 'l', long = "locale", default_value = "th", global = true)]
    pub locale: Locale,

    /// Maximum number of postal-code suggestions
    #[arg(long = "limit", default_value_t = DEFAULT_SUGGESTION_LIMIT, global = true)]
    pub limit: usize,

    /// Log every cascade step to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the reference table
    Stats,

    /// List all provinces
    Provinces,

    /// List the districts of a province
    Districts {
        /// Province code (e.g. 10)
        province: AreaCode,
    },

    /// List the subdistricts of a district with their postal codes
    Subdistricts {
        /// District code (e.g. 1004)
        district: AreaCode,
    },

    /// Show every area served by a postal code
    Lookup {
        /// Five-digit postal code (e.g. 10500)
        postal: String,
    },

    /// Postal codes starting with a prefix, as offered while typing
    Suggest {
        /// Leading digits (e.g. 105)
        prefix: String,
    },

    /// Write the loaded table as a binary image
    Build {
        /// Output path, conventionally ending in `.bin`
        out: PathBuf,
    },

    /// Feed a script of form inputs through the resolution engine
    Replay {
        /// Script file, or `-` for stdin
        script: PathBuf,
    },
}
