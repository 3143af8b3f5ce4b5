//! MLB Player Comparison Library
//!
//! Search MLB players, fetch their regular-season hitting stats from the
//! public MLB Stats API, and build a side-by-side comparison that marks which
//! player leads each statistic.
//!
//! ## Features
//!
//! - **Player Search**: Find active players by name
//! - **Concurrent Loading**: Person info and season stats are fetched in parallel
//! - **Normalization**: Raw API payloads mapped onto a fixed statistic catalog
//! - **Comparison**: Per-stat formatting and "higher is better" highlighting
//! - **Stale-safe Sessions**: Late responses never overwrite a newer pick
//!
//! ## Quick Start
//!
//! ```rust
//! use mlb_compare::stats::{build_comparison_rows, normalize, HITTING_CATALOG};
//! use serde_json::json;
//!
//! let person = json!({ "people": [ { "id": 592450, "fullName": "Aaron Judge" } ] });
//! let stats = json!({ "stats": [ { "splits": [ { "stat": { "homeRuns": 53, "avg": ".331" } } ] } ] });
//!
//! let judge = normalize(&person, &stats, "Judge").unwrap();
//! let rows = build_comparison_rows(&HITTING_CATALOG, Some(&judge), None);
//!
//! let avg = rows.iter().find(|r| r.key == "avg").unwrap();
//! assert_eq!(avg.left, "0.331");
//! assert_eq!(avg.right, "-");
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export MLB_COMPARE_SEASON=2024
//! export MLB_STATS_BASE_URL=https://statsapi.mlb.com/api/v1
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod mlb;
pub mod session;
pub mod stats;

// Re-export commonly used types
pub use cli::types::{PlayerId, Season, Slot};
pub use error::{CompareError, Result};
pub use session::ComparisonSession;

pub const SEASON_ENV_VAR: &str = "MLB_COMPARE_SEASON";
pub const BASE_URL_ENV_VAR: &str = "MLB_STATS_BASE_URL";
