//! ID types for the MLB Stats API.

use crate::error::{CompareError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for MLB person IDs.
///
/// MLB identifies every player by a numeric person ID (Aaron Judge is
/// `592450`). The same ID drives the info, stats and headshot lookups.
///
/// # Examples
///
/// ```rust
/// use mlb_compare::PlayerId;
///
/// let id: PlayerId = "592450".parse().unwrap();
/// assert_eq!(id.as_u64(), 592450);
/// assert_eq!(id.to_string(), "592450");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| CompareError::InvalidPlayerId {
                value: s.to_string(),
            })
    }
}

/// Type-safe wrapper for MLB sport IDs (`1` is Major League Baseball).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SportId(pub u32);

impl SportId {
    pub const MLB: SportId = SportId(1);

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl Default for SportId {
    fn default() -> Self {
        Self::MLB
    }
}

impl fmt::Display for SportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player given on the command line: a numeric person ID or a name to search.
///
/// ```rust
/// use mlb_compare::{cli::types::PlayerRef, PlayerId};
///
/// assert_eq!("592450".parse::<PlayerRef>().unwrap(), PlayerRef::Id(PlayerId::new(592450)));
/// assert_eq!(
///     "Aaron Judge".parse::<PlayerRef>().unwrap(),
///     PlayerRef::Name("Aaron Judge".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerRef {
    Id(PlayerId),
    Name(String),
}

impl FromStr for PlayerRef {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
            trimmed.parse().map(PlayerRef::Id)
        } else {
            Ok(PlayerRef::Name(trimmed.to_string()))
        }
    }
}
