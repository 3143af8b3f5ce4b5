//! Status messages and failure reporting shared across commands.
//!
//! Failures in search and load flows stop here: the full error goes to the
//! log, the user gets a short status line.

use log::{debug, warn};

use crate::{cli::types::Slot, error::CompareError, mlb::types::SearchOutcome};

pub const PROMPT_EMPTY_QUERY: &str = "Type a player name to search.";
pub const NO_PLAYERS_FOUND: &str = "No players found. Try a different name.";
pub const STATS_LOADED: &str = "Stats loaded. Compare below.";
pub const SEARCH_FAILED: &str =
    "Error searching players (MLB API). Set RUST_LOG=debug for details.";
pub const LOAD_FAILED: &str =
    "Error loading player stats (MLB API). Set RUST_LOG=debug for details.";

pub fn searching(slot: Option<Slot>) -> String {
    match slot {
        Some(slot) => format!("Searching players for Player {slot}..."),
        None => "Searching players...".to_string(),
    }
}

pub fn loading(name: &str, slot: Slot) -> String {
    format!("Loading stats for {name} (Player {slot})...")
}

/// Status line describing a finished search.
pub fn search_status(outcome: &SearchOutcome, slot: Option<Slot>) -> String {
    match (outcome, slot) {
        (SearchOutcome::EmptyQuery, _) => PROMPT_EMPTY_QUERY.to_string(),
        (SearchOutcome::NoResults, _) => NO_PLAYERS_FOUND.to_string(),
        (SearchOutcome::Found(candidates), Some(slot)) => format!(
            "Found {} player(s). Pick one for Player {slot} with `pick {slot} <n>`.",
            candidates.len()
        ),
        (SearchOutcome::Found(candidates), None) => {
            format!("Found {} player(s).", candidates.len())
        }
    }
}

/// Log a failed search or load and return the message to show the user.
pub fn report_failure(context: &str, err: &CompareError, user_message: &'static str) -> &'static str {
    let kind = if err.is_transport() {
        "transport"
    } else if err.is_invalid_source() {
        "invalid source data"
    } else {
        "unexpected"
    };
    warn!("{context} failed ({kind}): {err}");
    if let CompareError::ApiStatus { body, .. } = err {
        debug!("{context} response body: {body}");
    }
    user_message
}
