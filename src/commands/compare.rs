//! Two-player comparison command implementation

use log::info;

use crate::{
    cli::types::{PlayerId, PlayerRef, Slot},
    commands::{
        common::{
            loading, report_failure, search_status, LOAD_FAILED, NO_PLAYERS_FOUND, SEARCH_FAILED,
            STATS_LOADED,
        },
        render::render_table,
    },
    mlb::{
        http::{ClientConfig, MlbClient},
        types::SearchOutcome,
    },
    session::ComparisonSession,
    stats::{CanonicalPlayerStats, HITTING_CATALOG},
    Result,
};

/// Configuration parameters for the compare command.
#[derive(Debug)]
pub struct CompareParams {
    pub left: Option<PlayerRef>,
    pub right: Option<PlayerRef>,
    pub config: ClientConfig,
    pub as_json: bool,
    pub verbose: bool,
}

/// What happened when filling one slot.
#[derive(Debug)]
pub enum SlotLoad {
    /// No player was requested for the slot.
    Empty,
    Loaded(CanonicalPlayerStats),
    /// The search or load failed; carries the status line for the user.
    Failed(String),
}

/// Load both slots concurrently and print the comparison.
///
/// Search and load failures are reported per slot; the table is printed
/// with whatever loaded.
pub async fn handle_compare(params: CompareParams) -> Result<()> {
    let client = MlbClient::new(params.config)?;
    let mut session = ComparisonSession::new();

    let left_ticket = session.begin_load(Slot::Left);
    let right_ticket = session.begin_load(Slot::Right);

    let (left, right) = tokio::join!(
        load_slot(&client, Slot::Left, params.left.as_ref()),
        load_slot(&client, Slot::Right, params.right.as_ref()),
    );

    let mut any_loaded = false;
    for (ticket, load) in [(left_ticket, left), (right_ticket, right)] {
        match load {
            SlotLoad::Loaded(player) => any_loaded |= session.complete_load(ticket, player),
            SlotLoad::Failed(status) => eprintln!("Player {}: {}", ticket.slot(), status),
            SlotLoad::Empty => {}
        }
    }

    let report = session.report(&HITTING_CATALOG);
    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&report)?); // tarpaulin::skip
    } else {
        if any_loaded {
            eprintln!("{STATS_LOADED}");
        }
        println!("{}", render_table(&report, params.verbose)); // tarpaulin::skip
    }

    Ok(())
}

/// Resolve and load the player for one slot.
pub async fn load_slot(client: &MlbClient, slot: Slot, player: Option<&PlayerRef>) -> SlotLoad {
    let Some(player) = player else {
        return SlotLoad::Empty;
    };

    let (id, fallback_name) = match resolve_player(client, slot, player).await {
        Ok(resolved) => resolved,
        Err(status) => return SlotLoad::Failed(status),
    };

    eprintln!("{}", loading(&fallback_name, slot));
    match client.load_player(id, &fallback_name).await {
        Ok(stats) => SlotLoad::Loaded(stats),
        Err(e) => SlotLoad::Failed(
            report_failure(&format!("stats load for player {id}"), &e, LOAD_FAILED).to_string(),
        ),
    }
}

/// A player ID is used as-is; a name resolves to the first search result.
async fn resolve_player(
    client: &MlbClient,
    slot: Slot,
    player: &PlayerRef,
) -> std::result::Result<(PlayerId, String), String> {
    match player {
        PlayerRef::Id(id) => Ok((*id, format!("Player #{id}"))),
        PlayerRef::Name(name) => match client.search_players(name).await {
            Ok(SearchOutcome::Found(candidates)) => match candidates.into_iter().next() {
                Some(first) => {
                    info!("Player {slot}: {name:?} resolved to {first} (#{})", first.id);
                    Ok((first.id, first.name))
                }
                None => Err(NO_PLAYERS_FOUND.to_string()),
            },
            Ok(outcome) => Err(search_status(&outcome, Some(slot))),
            Err(e) => Err(report_failure("player search", &e, SEARCH_FAILED).to_string()),
        },
    }
}
