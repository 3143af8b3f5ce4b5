//! End-to-end tests: raw MLB payloads -> normalized stats -> comparison rows

use mlb_compare::{
    stats::{build_comparison_rows, normalize, ComparisonRow, HITTING_CATALOG},
    ComparisonSession, Slot,
};
use serde_json::{json, Value};

fn person(id: u64, name: &str) -> Value {
    json!({ "people": [ { "id": id, "fullName": name } ] })
}

fn season(stat: Value) -> Value {
    json!({ "stats": [ { "splits": [ { "season": "2025", "stat": stat } ] } ] })
}

fn row<'a>(rows: &'a [ComparisonRow], label: &str) -> &'a ComparisonRow {
    rows.iter().find(|r| r.label == label).unwrap()
}

#[test]
fn test_scenario_games_avg_home_runs() {
    let left = normalize(
        &person(1, "Left"),
        &season(json!({ "gamesPlayed": 10, "avg": 0.300, "homeRuns": 2 })),
        "Left",
    )
    .unwrap();
    let right = normalize(
        &person(2, "Right"),
        &season(json!({ "gamesPlayed": 8, "avg": 0.300, "homeRuns": 5 })),
        "Right",
    )
    .unwrap();

    let rows = build_comparison_rows(&HITTING_CATALOG, Some(&left), Some(&right));
    assert_eq!(rows.len(), 11);

    let games = row(&rows, "Games");
    assert_eq!(games.left, "10");
    assert_eq!(games.right, "8");
    assert!(games.left_better && !games.right_better);

    let avg = row(&rows, "AVG");
    assert_eq!(avg.left, "0.300");
    assert_eq!(avg.right, "0.300");
    assert!(!avg.left_better && !avg.right_better);

    let hr = row(&rows, "HR");
    assert_eq!(hr.left, "2");
    assert_eq!(hr.right, "5");
    assert!(hr.right_better && !hr.left_better);

    for r in rows
        .iter()
        .filter(|r| !["Games", "AVG", "HR"].contains(&r.label))
    {
        assert_eq!((r.left.as_str(), r.right.as_str()), ("-", "-"), "{}", r.label);
        assert!(!r.left_better && !r.right_better);
    }
}

#[test]
fn test_scenario_right_slot_empty() {
    let left = normalize(
        &person(592450, "Aaron Judge"),
        &season(json!({
            "gamesPlayed": 152, "atBats": 541, "avg": ".331", "obp": ".457",
            "slg": ".688", "ops": "1.145", "hits": 179, "homeRuns": 53,
            "rbi": 114, "runs": 137, "stolenBases": 12
        })),
        "Judge",
    )
    .unwrap();

    let rows = build_comparison_rows(&HITTING_CATALOG, Some(&left), None);

    assert!(rows.iter().all(|r| r.right == "-"));
    assert!(rows.iter().all(|r| !r.left_better && !r.right_better));
    assert_eq!(
        rows.iter().map(|r| r.left.as_str()).collect::<Vec<_>>(),
        vec!["152", "541", "0.331", "0.457", "0.688", "1.145", "179", "53", "114", "137", "12"]
    );
}

#[test]
fn test_player_without_season_stats_compares_as_dashes() {
    let veteran = normalize(
        &person(1, "Veteran"),
        &season(json!({ "homeRuns": 20 })),
        "Veteran",
    )
    .unwrap();
    let rookie = normalize(&person(2, "Rookie"), &json!({ "stats": [] }), "Rookie").unwrap();

    let rows = build_comparison_rows(&HITTING_CATALOG, Some(&veteran), Some(&rookie));
    let hr = row(&rows, "HR");

    assert_eq!(hr.left, "20");
    assert_eq!(hr.right, "-");
    assert!(!hr.left_better && !hr.right_better);
}

#[test]
fn test_session_replaces_player_wholesale() {
    let mut session = ComparisonSession::new();

    let first = normalize(
        &person(1, "First"),
        &season(json!({ "homeRuns": 30, "rbi": 90 })),
        "First",
    )
    .unwrap();
    let second = normalize(&person(2, "Second"), &season(json!({ "homeRuns": 10 })), "Second")
        .unwrap();

    let ticket = session.begin_load(Slot::Left);
    session.complete_load(ticket, first);
    let ticket = session.begin_load(Slot::Left);
    session.complete_load(ticket, second);

    let rows = session.rows(&HITTING_CATALOG);
    assert_eq!(row(&rows, "HR").left, "10");
    // Nothing carried over from the first player.
    assert_eq!(row(&rows, "RBI").left, "-");
}
