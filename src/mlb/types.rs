use crate::cli::types::PlayerId;
use serde::{Deserialize, Serialize};
use std::fmt;


/// Envelope of `/people/search`.
#[derive(Debug, Deserialize)]
pub struct SearchEnvelope {
    #[serde(default)]
    pub people: Vec<SearchPerson>,
}

/// One person as returned by `/people/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPerson {
    pub id: PlayerId,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(rename = "currentTeam", default)]
    pub current_team: Option<TeamRef>,
    #[serde(rename = "primaryPosition", default)]
    pub primary_position: Option<PositionRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamRef {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PositionRef {
    #[serde(default)]
    pub abbreviation: Option<String>,
}

/// A selectable search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerCandidate {
    pub id: PlayerId,
    pub name: String,
    pub team: Option<String>,
    pub position: Option<String>,
}

impl From<SearchPerson> for PlayerCandidate {
    fn from(p: SearchPerson) -> Self {
        Self {
            id: p.id,
            name: p
                .full_name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| "Unknown".to_string()),
            team: p.current_team.and_then(|t| t.name),
            position: p.primary_position.and_then(|pos| pos.abbreviation),
        }
    }
}

/// `"Aaron Judge (New York Yankees)"`, or just the name without a team.
impl fmt::Display for PlayerCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.team {
            Some(team) => write!(f, "{} ({})", self.name, team),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Result of a player search.
///
/// An empty result is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query was blank; no request was sent.
    EmptyQuery,
    NoResults,
    Found(Vec<PlayerCandidate>),
}
