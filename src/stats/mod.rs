//! Stat normalization and side-by-side comparison
//!
//! - `catalog`: the ordered list of displayed statistics
//! - `normalize`: raw MLB payloads -> [`CanonicalPlayerStats`]
//! - `compare`: canonical stats -> formatted, highlighted [`ComparisonRow`]s
//!
//! Everything here is pure; network access lives in [`crate::mlb`].

pub mod catalog;
pub mod compare;
pub mod normalize;
pub mod types;

pub use catalog::{StatisticDefinition, ValueKind, HITTING_CATALOG};
pub use compare::{build_comparison_rows, format_value, PLACEHOLDER};
pub use normalize::{normalize, normalize_with};
pub use types::{CanonicalPlayerStats, ComparisonRow, StatValue};
