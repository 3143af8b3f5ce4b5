//! Two-slot comparison state.
//!
//! A [`ComparisonSession`] owns whatever is loaded in slot 1 and slot 2.
//! Loads are tagged with a per-slot generation: [`ComparisonSession::begin_load`]
//! hands out a [`LoadTicket`], and only the ticket from the most recent
//! `begin_load` for a slot may store a result. Responses from superseded
//! selections that arrive late are dropped instead of overwriting newer data.

use log::debug;
use serde::Serialize;

use crate::{
    cli::types::{PlayerId, Slot},
    stats::{build_comparison_rows, CanonicalPlayerStats, ComparisonRow, StatisticDefinition},
};


/// Proof that a load was started for a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    slot: Slot,
    generation: u64,
}

impl LoadTicket {
    pub fn slot(&self) -> Slot {
        self.slot
    }
}

#[derive(Debug, Default)]
struct SlotState {
    player: Option<CanonicalPlayerStats>,
    generation: u64,
}

#[derive(Debug, Default)]
pub struct ComparisonSession {
    left: SlotState,
    right: SlotState,
}

impl ComparisonSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load for `slot`, superseding any load still in flight.
    pub fn begin_load(&mut self, slot: Slot) -> LoadTicket {
        let state = self.state_mut(slot);
        state.generation += 1;
        LoadTicket {
            slot,
            generation: state.generation,
        }
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.state(ticket.slot).generation == ticket.generation
    }

    /// Store a loaded player, replacing the slot's previous one.
    ///
    /// Returns `false` and leaves the slot untouched when the ticket has been
    /// superseded by a later `begin_load`.
    pub fn complete_load(&mut self, ticket: LoadTicket, player: CanonicalPlayerStats) -> bool {
        if !self.is_current(ticket) {
            debug!(
                "discarding stale load of {} for Player {} (generation {}, current {})",
                player.name,
                ticket.slot,
                ticket.generation,
                self.state(ticket.slot).generation
            );
            return false;
        }
        self.state_mut(ticket.slot).player = Some(player);
        true
    }

    pub fn player(&self, slot: Slot) -> Option<&CanonicalPlayerStats> {
        self.state(slot).player.as_ref()
    }

    /// The loaded player's name, or "Player N" for an empty slot.
    pub fn display_name(&self, slot: Slot) -> String {
        self.player(slot)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| slot.placeholder_name())
    }

    pub fn rows(&self, catalog: &[StatisticDefinition]) -> Vec<ComparisonRow> {
        build_comparison_rows(catalog, self.player(Slot::Left), self.player(Slot::Right))
    }

    /// Headers and rows, ready to print or serialize.
    pub fn report(&self, catalog: &[StatisticDefinition]) -> ComparisonReport {
        ComparisonReport {
            left: self.header(Slot::Left),
            right: self.header(Slot::Right),
            rows: self.rows(catalog),
        }
    }

    fn header(&self, slot: Slot) -> PlayerHeader {
        let player = self.player(slot);
        PlayerHeader {
            slot: slot.number(),
            name: self.display_name(slot),
            loaded: player.is_some(),
            player_id: player.and_then(|p| p.player_id),
            team: player.and_then(|p| p.team.clone()),
            position: player.and_then(|p| p.position.clone()),
            headshot_url: player.and_then(|p| p.headshot_url()),
        }
    }

    fn state(&self, slot: Slot) -> &SlotState {
        match slot {
            Slot::Left => &self.left,
            Slot::Right => &self.right,
        }
    }

    fn state_mut(&mut self, slot: Slot) -> &mut SlotState {
        match slot {
            Slot::Left => &mut self.left,
            Slot::Right => &mut self.right,
        }
    }
}

/// Column header for one slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerHeader {
    pub slot: u8,
    pub name: String,
    pub loaded: bool,
    pub player_id: Option<PlayerId>,
    pub team: Option<String>,
    pub position: Option<String>,
    pub headshot_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub left: PlayerHeader,
    pub right: PlayerHeader,
    pub rows: Vec<ComparisonRow>,
}
