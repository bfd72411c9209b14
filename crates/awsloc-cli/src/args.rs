use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for awsloc
#[derive(Debug, Parser)]
#[command(
    name = "awsloc",
    version,
    about = "Manage and search AWS Location Service place indexes"
)]
pub struct CliArgs {
    /// Output JSON instead of a human-readable report
    #[arg(short = 'j', long = "json", global = true)]
    pub json: bool,

    /// Log level
    #[arg(long = "loglevel", value_enum, default_value_t = LogLevel::Info, global = true)]
    pub loglevel: LogLevel,

    /// Path to the YAML config file (default: ./config.yaml)
    #[arg(long = "config", visible_alias = "dotenv", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a place index
    Create {
        #[command(flatten)]
        target: IndexArg,

        /// Index description
        #[arg(long)]
        description: Option<String>,

        /// Index tags as key=value, comma-separated or repeated
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// Delete a place index
    Delete {
        #[command(flatten)]
        target: IndexArg,
    },

    /// Describe a place index (defaults to the configured index)
    Describe {
        #[command(flatten)]
        target: IndexArg,
    },

    /// List place indexes
    List {
        /// Maximum number of entries to return
        #[arg(long)]
        max_results: Option<i32>,
    },

    /// Search a coordinate, get a legible address
    ///
    /// Reverse geocodes a coordinate and returns a legible address, finding
    /// places or points of interest near the position.
    Position {
        #[command(flatten)]
        target: IndexArg,

        /// Latitude
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        /// Maximum number of results
        #[arg(long)]
        max_results: Option<i32>,
    },

    /// Search free-form text for suggestions
    ///
    /// Generates suggestions for addresses and points of interest from
    /// partial or misspelled text (autocomplete, fuzzy matching).
    Suggestion {
        #[command(flatten)]
        search: SearchArgs,

        /// ISO 3166 alpha-3 country codes to limit the search to (at least one)
        #[arg(long = "country", value_delimiter = ',')]
        countries: Vec<String>,
    },

    /// Geocode free-form text
    ///
    /// Geocodes an address, name, city or region to find places or points
    /// of interest.
    Text {
        #[command(flatten)]
        search: SearchArgs,

        /// ISO 3166 alpha-3 country codes to limit the search to
        #[arg(long = "country", value_delimiter = ',')]
        countries: Vec<String>,
    },

    /// Update a place index
    Update {
        #[command(flatten)]
        target: IndexArg,

        /// New index description
        #[arg(long)]
        description: Option<String>,
    },
}

impl Commands {
    /// The `--index` flag, if this subcommand takes one and it was given.
    pub fn index(&self) -> Option<&str> {
        match self {
            Self::Create { target, .. }
            | Self::Delete { target }
            | Self::Describe { target }
            | Self::Position { target, .. }
            | Self::Update { target, .. } => target.index.as_deref(),
            Self::Suggestion { search, .. } | Self::Text { search, .. } => {
                search.target.index.as_deref()
            }
            Self::List { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct IndexArg {
    /// Index name (falls back to IndexName in the config file)
    #[arg(long)]
    pub index: Option<String>,
}

/// Flags shared by the suggestion and text searches.
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    #[command(flatten)]
    pub target: IndexArg,

    /// Free-form text to search
    #[arg(long)]
    pub text: String,

    /// Bias latitude
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Bias longitude
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Bounding box southwest longitude
    #[arg(long, allow_negative_numbers = true)]
    pub x1: Option<f64>,

    /// Bounding box northeast longitude
    #[arg(long, allow_negative_numbers = true)]
    pub x2: Option<f64>,

    /// Bounding box southwest latitude
    #[arg(long, allow_negative_numbers = true)]
    pub y1: Option<f64>,

    /// Bounding box northeast latitude
    #[arg(long, allow_negative_numbers = true)]
    pub y2: Option<f64>,

    /// Maximum number of results
    #[arg(long)]
    pub max_results: Option<i32>,
}
