//! Type-safe wrappers for MLB Stats API identifiers and comparison slots.

pub mod ids;
pub mod slot;
pub mod time;

pub use ids::{PlayerId, PlayerRef, SportId};
pub use slot::Slot;
pub use time::Season;
