use serde::Serialize;
use std::collections::BTreeMap;

use crate::{cli::types::PlayerId, mlb::http::headshot_url, stats::catalog::StatisticDefinition};

/// A single statistic as it came from the data source.
///
/// `Text` keeps values the API sends as strings (rate stats like `".327"`)
/// exactly as received; they are only coerced when formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    Absent,
    Number(f64),
    Text(String),
}

impl StatValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, StatValue::Absent)
    }
}

static ABSENT: StatValue = StatValue::Absent;

/// Normalized season stats for one player.
///
/// Holds a value for every key of the catalog it was built from. Keys the
/// catalog does not know about also read as [`StatValue::Absent`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalPlayerStats {
    pub name: String,
    pub player_id: Option<PlayerId>,
    pub team: Option<String>,
    pub position: Option<String>,
    values: BTreeMap<String, StatValue>,
}

impl CanonicalPlayerStats {
    /// Stats with every catalog key marked absent.
    pub fn empty(name: impl Into<String>, catalog: &[StatisticDefinition]) -> Self {
        Self {
            name: name.into(),
            player_id: None,
            team: None,
            position: None,
            values: catalog
                .iter()
                .map(|def| (def.key.to_string(), StatValue::Absent))
                .collect(),
        }
    }

    pub fn with_value(mut self, key: &str, value: StatValue) -> Self {
        self.values.insert(key.to_string(), value);
        self
    }

    pub fn with_player_id(mut self, id: PlayerId) -> Self {
        self.player_id = Some(id);
        self
    }

    pub fn get(&self, key: &str) -> &StatValue {
        self.values.get(key).unwrap_or(&ABSENT)
    }

    pub fn values(&self) -> impl Iterator<Item = (&str, &StatValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn headshot_url(&self) -> Option<String> {
        self.player_id.map(headshot_url)
    }
}

/// One rendered line of the comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub key: &'static str,
    pub left: String,
    pub right: String,
    pub left_better: bool,
    pub right_better: bool,
}
