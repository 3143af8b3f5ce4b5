//! Comparison slot identifiers.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One of the two side-by-side comparison positions.
///
/// Users refer to slots as `1` and `2`; the table renders slot 1 on the
/// left and slot 2 on the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Slot {
    Left,
    Right,
}

impl Slot {
    pub const BOTH: [Slot; 2] = [Slot::Left, Slot::Right];

    /// 1-based slot number as shown to the user.
    pub fn number(self) -> u8 {
        match self {
            Slot::Left => 1,
            Slot::Right => 2,
        }
    }

    /// Header text used while no player is loaded in this slot.
    pub fn placeholder_name(self) -> String {
        format!("Player {}", self.number())
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl FromStr for Slot {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "left" | "l" => Ok(Slot::Left),
            "2" | "right" | "r" => Ok(Slot::Right),
            other => Err(format!("Unknown slot: {other}. Use 1 or 2.")),
        }
    }
}
