//! Side-by-side comparison and display formatting.

use crate::stats::{
    catalog::{StatisticDefinition, ValueKind},
    types::{CanonicalPlayerStats, ComparisonRow, StatValue},
};


/// Shown for an empty slot or a statistic with no value.
pub const PLACEHOLDER: &str = "-";

/// Build one row per catalog entry, in catalog order.
///
/// A side is highlighted only when both sides coerce to finite numbers and
/// that side is strictly greater. Higher is better for every statistic.
pub fn build_comparison_rows(
    catalog: &[StatisticDefinition],
    left: Option<&CanonicalPlayerStats>,
    right: Option<&CanonicalPlayerStats>,
) -> Vec<ComparisonRow> {
    catalog
        .iter()
        .map(|def| {
            let left_value = left.map(|p| p.get(def.key));
            let right_value = right.map(|p| p.get(def.key));

            let (left_better, right_better) =
                match (left_value.and_then(coerce), right_value.and_then(coerce)) {
                    (Some(a), Some(b)) if a > b => (true, false),
                    (Some(a), Some(b)) if b > a => (false, true),
                    _ => (false, false),
                };

            ComparisonRow {
                label: def.label,
                key: def.key,
                left: display(left_value, def.kind),
                right: display(right_value, def.kind),
                left_better,
                right_better,
            }
        })
        .collect()
}

/// Numeric reading of a value, if it has a finite one.
///
/// Strings are trimmed and parsed, so the API's `".327"` style rate stats
/// compare as numbers.
pub fn coerce(value: &StatValue) -> Option<f64> {
    match value {
        StatValue::Absent => None,
        StatValue::Number(n) => Some(*n).filter(|n| n.is_finite()),
        StatValue::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
        }
    }
}

/// Render a value for display.
///
/// Values that do not coerce to a number are shown as received.
pub fn format_value(value: &StatValue, kind: ValueKind) -> String {
    match (coerce(value), value) {
        (Some(n), _) => format_number(n, kind),
        (None, StatValue::Absent) => PLACEHOLDER.to_string(),
        (None, StatValue::Text(raw)) => raw.clone(),
        (None, StatValue::Number(n)) => n.to_string(),
    }
}

/// Ties round to even on the exact binary value of `n`.
pub fn format_number(n: f64, kind: ValueKind) -> String {
    match kind {
        ValueKind::Integer => format!("{:.0}", n),
        ValueKind::Fixed3 => format!("{:.3}", n),
    }
}

fn display(value: Option<&StatValue>, kind: ValueKind) -> String {
    match value {
        Some(value) => format_value(value, kind),
        None => PLACEHOLDER.to_string(),
    }
}
