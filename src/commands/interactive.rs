//! Interactive comparison session.
//!
//! Reads commands from stdin while player loads run in the background.
//! Finished loads come back over a channel and go through the session's
//! generation check, so picking a new player for a slot before the previous
//! pick has loaded can never leave the older player on screen.

use log::debug;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
};

use crate::{
    cli::types::Slot,
    commands::{
        common::{
            loading, report_failure, search_status, searching, LOAD_FAILED, SEARCH_FAILED,
            STATS_LOADED,
        },
        render::{render_candidates, render_table},
    },
    mlb::{
        http::{ClientConfig, MlbClient},
        types::{PlayerCandidate, SearchOutcome},
    },
    session::{ComparisonSession, LoadTicket},
    stats::{CanonicalPlayerStats, HITTING_CATALOG},
    Result,
};

pub const HELP: &str = "\
Commands:
  search <1|2> <name>   search players for a slot
  pick <1|2> <n>        load result n into the slot
  show                  print the comparison table
  help                  show this help
  quit                  leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Search { slot: Slot, query: String },
    Pick { slot: Slot, index: usize },
    Show,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> std::result::Result<Option<SessionCommand>, String> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };

    let command = match command.to_lowercase().as_str() {
        "search" | "s" => {
            let slot = parse_slot(words.next())?;
            let query = words.collect::<Vec<_>>().join(" ");
            SessionCommand::Search { slot, query }
        }
        "pick" | "p" => {
            let slot = parse_slot(words.next())?;
            let index = words
                .next()
                .and_then(|n| n.parse::<usize>().ok())
                .filter(|n| *n >= 1)
                .ok_or_else(|| "Usage: pick <1|2> <n>".to_string())?;
            SessionCommand::Pick { slot, index }
        }
        "show" => SessionCommand::Show,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        other => return Err(format!("Unknown command: {other}. Type `help`.")),
    };
    Ok(Some(command))
}

fn parse_slot(word: Option<&str>) -> std::result::Result<Slot, String> {
    word.ok_or_else(|| "Missing slot: use 1 or 2.".to_string())?
        .parse()
}

/// A background load that has finished, successfully or not.
#[derive(Debug)]
pub struct LoadDone {
    pub ticket: LoadTicket,
    pub result: Result<CanonicalPlayerStats>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Applied,
    /// A newer pick for the same slot was made; the result was dropped.
    Stale,
    Failed(&'static str),
}

/// Session plus the latest search results for each slot.
#[derive(Debug, Default)]
pub struct InteractiveState {
    session: ComparisonSession,
    left_results: Vec<PlayerCandidate>,
    right_results: Vec<PlayerCandidate>,
}

impl InteractiveState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &ComparisonSession {
        &self.session
    }

    pub fn results(&self, slot: Slot) -> &[PlayerCandidate] {
        match slot {
            Slot::Left => &self.left_results,
            Slot::Right => &self.right_results,
        }
    }

    /// Replace the slot's result list with the outcome of a new search.
    pub fn record_search(&mut self, slot: Slot, outcome: &SearchOutcome) {
        let results = match outcome {
            SearchOutcome::Found(candidates) => candidates.clone(),
            SearchOutcome::EmptyQuery | SearchOutcome::NoResults => Vec::new(),
        };
        match slot {
            Slot::Left => self.left_results = results,
            Slot::Right => self.right_results = results,
        }
    }

    pub fn clear_results(&mut self, slot: Slot) {
        self.record_search(slot, &SearchOutcome::NoResults);
    }

    /// Start loading result `index` (1-based) into `slot`.
    pub fn select(
        &mut self,
        slot: Slot,
        index: usize,
    ) -> std::result::Result<(LoadTicket, PlayerCandidate), String> {
        let candidate = index
            .checked_sub(1)
            .and_then(|i| self.results(slot).get(i))
            .cloned()
            .ok_or_else(|| {
                format!(
                    "No result {index} for Player {slot}. Search first with `search {slot} <name>`."
                )
            })?;
        let ticket = self.session.begin_load(slot);
        Ok((ticket, candidate))
    }

    pub fn finish_load(&mut self, done: LoadDone) -> LoadStatus {
        match done.result {
            Ok(player) => {
                if self.session.complete_load(done.ticket, player) {
                    LoadStatus::Applied
                } else {
                    LoadStatus::Stale
                }
            }
            Err(e) if !self.session.is_current(done.ticket) => {
                debug!("ignoring failed stale load for Player {}: {e}", done.ticket.slot());
                LoadStatus::Stale
            }
            Err(e) => LoadStatus::Failed(report_failure("stats load", &e, LOAD_FAILED)),
        }
    }
}

/// Run the interactive session until `quit` or end of input.
pub async fn handle_interactive(config: ClientConfig, verbose: bool) -> Result<()> {
    let client = MlbClient::new(config)?;
    let mut state = InteractiveState::new();
    let (tx, mut rx) = mpsc::unbounded_channel::<LoadDone>();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Comparing {} regular season hitting stats.", client.config().season);
    println!("{HELP}");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let command = match parse_command(&line) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(message) => {
                        eprintln!("{message}");
                        continue;
                    }
                };

                match command {
                    SessionCommand::Quit => break,
                    SessionCommand::Help => println!("{HELP}"),
                    SessionCommand::Show => {
                        println!("{}", render_table(&state.session().report(&HITTING_CATALOG), verbose));
                    }
                    SessionCommand::Search { slot, query } => {
                        state.clear_results(slot);
                        if !query.trim().is_empty() {
                            println!("{}", searching(Some(slot)));
                        }
                        match client.search_players(&query).await {
                            Ok(outcome) => {
                                state.record_search(slot, &outcome);
                                println!("{}", search_status(&outcome, Some(slot)));
                                if let SearchOutcome::Found(candidates) = &outcome {
                                    println!("{}", render_candidates(candidates));
                                }
                            }
                            Err(e) => eprintln!("{}", report_failure("player search", &e, SEARCH_FAILED)),
                        }
                    }
                    SessionCommand::Pick { slot, index } => match state.select(slot, index) {
                        Ok((ticket, candidate)) => {
                            println!("{}", loading(&candidate.name, slot));
                            let client = client.clone();
                            let tx = tx.clone();
                            tokio::spawn(async move {
                                let result = client.load_player(candidate.id, &candidate.name).await;
                                let _ = tx.send(LoadDone { ticket, result });
                            });
                        }
                        Err(message) => eprintln!("{message}"),
                    },
                }
            }
            Some(done) = rx.recv() => {
                match state.finish_load(done) {
                    LoadStatus::Applied => {
                        println!("{STATS_LOADED}");
                        println!("{}", render_table(&state.session().report(&HITTING_CATALOG), verbose));
                    }
                    LoadStatus::Stale => {}
                    LoadStatus::Failed(message) => eprintln!("{message}"),
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
