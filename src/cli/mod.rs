//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{PlayerRef, Season};

use crate::mlb::http::{DEFAULT_SEARCH_LIMIT, DEFAULT_TIMEOUT_SECS};

/// Data source arguments shared between commands
#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Season year (or set `MLB_COMPARE_SEASON`). Defaults to 2025.
    #[clap(long, short)]
    pub season: Option<Season>,

    /// MLB Stats API base URL (or set `MLB_STATS_BASE_URL`).
    #[clap(long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    #[clap(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Maximum number of search results.
    #[clap(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
    pub limit: u32,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search active MLB players by name.
    Search {
        /// Player name (or part of it).
        query: Vec<String>,

        #[clap(flatten)]
        source: SourceArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Compare two players' regular-season hitting stats side by side.
    ///
    /// Each player is a numeric MLB person ID or a name; for a name the
    /// first search result is used. Either side may be omitted.
    Compare {
        /// Player for slot 1 (left column).
        #[clap(long, short)]
        left: Option<PlayerRef>,

        /// Player for slot 2 (right column).
        #[clap(long, short)]
        right: Option<PlayerRef>,

        #[clap(flatten)]
        source: SourceArgs,

        /// Output the comparison as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },

    /// Search and pick players for both slots from a prompt.
    Interactive {
        #[clap(flatten)]
        source: SourceArgs,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "mlb-compare", about = "Compare MLB hitters side by side")]
pub struct MlbCompare {
    /// Log request details (same as `RUST_LOG=debug`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
