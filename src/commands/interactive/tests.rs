//! Unit tests for the interactive session

use super::*;
use crate::{error::CompareError, stats::StatValue, PlayerId};

#[cfg(test)]
mod parse_tests {
    use super::*;

    #[test]
    fn test_parse_search() {
        assert_eq!(
            parse_command("search 1 aaron judge").unwrap(),
            Some(SessionCommand::Search {
                slot: Slot::Left,
                query: "aaron judge".to_string()
            })
        );
        assert_eq!(
            parse_command("  S 2   ohtani ").unwrap(),
            Some(SessionCommand::Search {
                slot: Slot::Right,
                query: "ohtani".to_string()
            })
        );
    }

    #[test]
    fn test_parse_search_without_query() {
        assert_eq!(
            parse_command("search 2").unwrap(),
            Some(SessionCommand::Search {
                slot: Slot::Right,
                query: String::new()
            })
        );
    }

    #[test]
    fn test_parse_pick() {
        assert_eq!(
            parse_command("pick 2 3").unwrap(),
            Some(SessionCommand::Pick {
                slot: Slot::Right,
                index: 3
            })
        );
        assert!(parse_command("pick 1 0").is_err());
        assert!(parse_command("pick 1 x").is_err());
        assert!(parse_command("pick 1").is_err());
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_command("show").unwrap(), Some(SessionCommand::Show));
        assert_eq!(parse_command("HELP").unwrap(), Some(SessionCommand::Help));
        assert_eq!(parse_command("quit").unwrap(), Some(SessionCommand::Quit));
        assert_eq!(parse_command("exit").unwrap(), Some(SessionCommand::Quit));
        assert_eq!(parse_command("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("search").unwrap_err().contains("Missing slot"));
        assert!(parse_command("search 3 judge").is_err());
        assert!(parse_command("dance").unwrap_err().contains("Unknown command"));
    }
}

#[cfg(test)]
mod state_tests {
    use super::*;

    fn candidates() -> Vec<PlayerCandidate> {
        vec![
            PlayerCandidate {
                id: PlayerId::new(592450),
                name: "Aaron Judge".to_string(),
                team: Some("New York Yankees".to_string()),
                position: Some("RF".to_string()),
            },
            PlayerCandidate {
                id: PlayerId::new(543333),
                name: "Aaron Hicks".to_string(),
                team: None,
                position: None,
            },
        ]
    }

    fn stats(name: &str, hr: f64) -> CanonicalPlayerStats {
        CanonicalPlayerStats::empty(name, &HITTING_CATALOG)
            .with_value("homeRuns", StatValue::Number(hr))
    }

    #[test]
    fn test_record_search_per_slot() {
        let mut state = InteractiveState::new();

        state.record_search(Slot::Left, &SearchOutcome::Found(candidates()));
        assert_eq!(state.results(Slot::Left).len(), 2);
        assert!(state.results(Slot::Right).is_empty());

        state.record_search(Slot::Left, &SearchOutcome::NoResults);
        assert!(state.results(Slot::Left).is_empty());
    }

    #[test]
    fn test_select_requires_results() {
        let mut state = InteractiveState::new();
        let err = state.select(Slot::Left, 1).unwrap_err();
        assert!(err.contains("search 1"));

        state.record_search(Slot::Left, &SearchOutcome::Found(candidates()));
        assert!(state.select(Slot::Left, 3).is_err());
        assert!(state.select(Slot::Left, 0).is_err());

        let (ticket, candidate) = state.select(Slot::Left, 2).unwrap();
        assert_eq!(ticket.slot(), Slot::Left);
        assert_eq!(candidate.name, "Aaron Hicks");
    }

    #[test]
    fn test_finish_load_applies_current_pick() {
        let mut state = InteractiveState::new();
        state.record_search(Slot::Right, &SearchOutcome::Found(candidates()));

        let (ticket, _) = state.select(Slot::Right, 1).unwrap();
        let status = state.finish_load(LoadDone {
            ticket,
            result: Ok(stats("Aaron Judge", 53.0)),
        });

        assert_eq!(status, LoadStatus::Applied);
        assert_eq!(state.session().display_name(Slot::Right), "Aaron Judge");
    }

    #[test]
    fn test_finish_load_drops_superseded_pick() {
        let mut state = InteractiveState::new();
        state.record_search(Slot::Left, &SearchOutcome::Found(candidates()));

        let (first, _) = state.select(Slot::Left, 1).unwrap();
        let (second, _) = state.select(Slot::Left, 2).unwrap();

        let status = state.finish_load(LoadDone {
            ticket: second,
            result: Ok(stats("Aaron Hicks", 8.0)),
        });
        assert_eq!(status, LoadStatus::Applied);

        // The first pick's response arrives late.
        let status = state.finish_load(LoadDone {
            ticket: first,
            result: Ok(stats("Aaron Judge", 53.0)),
        });
        assert_eq!(status, LoadStatus::Stale);
        assert_eq!(state.session().display_name(Slot::Left), "Aaron Hicks");
    }

    #[test]
    fn test_finish_load_failure_keeps_previous_player() {
        let mut state = InteractiveState::new();
        state.record_search(Slot::Left, &SearchOutcome::Found(candidates()));

        let (ticket, _) = state.select(Slot::Left, 1).unwrap();
        state.finish_load(LoadDone {
            ticket,
            result: Ok(stats("Aaron Judge", 53.0)),
        });

        let (ticket, _) = state.select(Slot::Left, 2).unwrap();
        let status = state.finish_load(LoadDone {
            ticket,
            result: Err(CompareError::ApiStatus {
                status: 502,
                body: String::new(),
            }),
        });

        assert_eq!(status, LoadStatus::Failed(LOAD_FAILED));
        assert_eq!(state.session().display_name(Slot::Left), "Aaron Judge");
    }

    #[test]
    fn test_finish_load_stale_failure_is_silent() {
        let mut state = InteractiveState::new();
        state.record_search(Slot::Left, &SearchOutcome::Found(candidates()));

        let (first, _) = state.select(Slot::Left, 1).unwrap();
        let _second = state.select(Slot::Left, 2).unwrap();

        let status = state.finish_load(LoadDone {
            ticket: first,
            result: Err(CompareError::invalid_source("bad payload")),
        });
        assert_eq!(status, LoadStatus::Stale);
    }
}
