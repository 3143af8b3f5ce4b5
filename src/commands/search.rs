//! Player search command implementation

use crate::{
    commands::{
        common::{report_failure, search_status, searching, SEARCH_FAILED},
        render::render_candidates,
    },
    mlb::{
        http::{ClientConfig, MlbClient},
        types::{PlayerCandidate, SearchOutcome},
    },
    Result,
};

/// Handle the search command
pub async fn handle_search(query: &str, config: ClientConfig, as_json: bool) -> Result<()> {
    let client = MlbClient::new(config)?;

    if !as_json {
        eprintln!("{}", searching(None));
    }

    let outcome = match client.search_players(query).await {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("{}", report_failure("player search", &e, SEARCH_FAILED));
            return Ok(());
        }
    };

    if as_json {
        let candidates: &[PlayerCandidate] = match &outcome {
            SearchOutcome::Found(candidates) => candidates.as_slice(),
            _ => &[],
        };
        println!("{}", serde_json::to_string_pretty(candidates)?); // tarpaulin::skip
        return Ok(());
    }

    eprintln!("{}", search_status(&outcome, None));
    if let SearchOutcome::Found(candidates) = &outcome {
        println!("{}", render_candidates(candidates)); // tarpaulin::skip
    }

    Ok(())
}
