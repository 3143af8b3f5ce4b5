//! The ordered catalog of hitting statistics shown in a comparison.

use serde::Serialize;

/// How a statistic's numeric value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValueKind {
    /// Whole number, no grouping or fractional digits (`"154"`).
    Integer,
    /// Fixed point with exactly three decimals (`"0.327"`, `"1.000"`).
    Fixed3,
}

/// One displayed statistic.
///
/// `key` is the canonical name used inside [`CanonicalPlayerStats`]; `sources`
/// lists the raw MLB field names that may carry the value, tried in order.
///
/// [`CanonicalPlayerStats`]: crate::stats::CanonicalPlayerStats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatisticDefinition {
    pub label: &'static str,
    pub key: &'static str,
    pub kind: ValueKind,
    #[serde(skip)]
    pub sources: &'static [&'static str],
}

impl StatisticDefinition {
    pub const fn new(
        label: &'static str,
        key: &'static str,
        kind: ValueKind,
        sources: &'static [&'static str],
    ) -> Self {
        Self {
            label,
            key,
            kind,
            sources,
        }
    }
}

/// Season hitting statistics, in display order.
///
/// Some fields come back under alternate names depending on the endpoint
/// (`gamesPlayed` vs `games`, `hr` vs `homeRuns`), hence the fallbacks.
pub const HITTING_CATALOG: [StatisticDefinition; 11] = [
    StatisticDefinition::new("Games", "games", ValueKind::Integer, &["gamesPlayed", "games"]),
    StatisticDefinition::new("AB", "atBats", ValueKind::Integer, &["atBats"]),
    StatisticDefinition::new("AVG", "avg", ValueKind::Fixed3, &["avg", "battingAverage"]),
    StatisticDefinition::new("OBP", "obp", ValueKind::Fixed3, &["obp"]),
    StatisticDefinition::new("SLG", "slg", ValueKind::Fixed3, &["slg"]),
    StatisticDefinition::new("OPS", "ops", ValueKind::Fixed3, &["ops"]),
    StatisticDefinition::new("Hits", "hits", ValueKind::Integer, &["hits"]),
    StatisticDefinition::new("HR", "homeRuns", ValueKind::Integer, &["homeRuns", "hr"]),
    StatisticDefinition::new("RBI", "rbi", ValueKind::Integer, &["rbi"]),
    StatisticDefinition::new("Runs", "runs", ValueKind::Integer, &["runs"]),
    StatisticDefinition::new("SB", "stolenBases", ValueKind::Integer, &["stolenBases", "sb"]),
];

/// Find a catalog entry by its canonical key.
pub fn find_by_key<'a>(
    catalog: &'a [StatisticDefinition],
    key: &str,
) -> Option<&'a StatisticDefinition> {
    catalog.iter().find(|def| def.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_order_and_labels() {
        let labels: Vec<&str> = HITTING_CATALOG.iter().map(|d| d.label).collect();
        assert_eq!(
            labels,
            vec!["Games", "AB", "AVG", "OBP", "SLG", "OPS", "Hits", "HR", "RBI", "Runs", "SB"]
        );
    }

    #[test]
    fn test_catalog_keys_are_unique() {
        let keys: HashSet<&str> = HITTING_CATALOG.iter().map(|d| d.key).collect();
        assert_eq!(keys.len(), HITTING_CATALOG.len());
    }

    #[test]
    fn test_every_entry_has_a_source() {
        for def in &HITTING_CATALOG {
            assert!(!def.sources.is_empty(), "{} has no source fields", def.key);
        }
    }

    #[test]
    fn test_rate_stats_are_fixed3() {
        for key in ["avg", "obp", "slg", "ops"] {
            assert_eq!(find_by_key(&HITTING_CATALOG, key).unwrap().kind, ValueKind::Fixed3);
        }
        assert_eq!(
            find_by_key(&HITTING_CATALOG, "homeRuns").unwrap().kind,
            ValueKind::Integer
        );
        assert!(find_by_key(&HITTING_CATALOG, "era").is_none());
    }
}
