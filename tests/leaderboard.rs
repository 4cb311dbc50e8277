//! Integration tests for leaderboard points, counters and ranking.

use round_robin_tournament::{
    admit_participant, compute_leaderboard, record_match_result, start_tournament, EntityStore,
    ErrorKind, GameMatch, MemoryStore, PlayerId, Standing, TournamentId, TournamentStatus,
};

fn started(names: &[&str]) -> (MemoryStore, TournamentId, Vec<PlayerId>) {
    let mut store = MemoryStore::new();
    let t = store.create_tournament().unwrap();
    let ids = names
        .iter()
        .map(|name| admit_participant(&mut store, t.id, name).unwrap().id)
        .collect();
    start_tournament(&mut store, t.id).unwrap();
    (store, t.id, ids)
}

fn find_match(store: &MemoryStore, id: TournamentId, a: PlayerId, b: PlayerId) -> GameMatch {
    store
        .matches_by_tournament(id)
        .unwrap()
        .into_iter()
        .find(|m| m.player_a_id == a && m.player_b_id == b)
        .unwrap()
}

fn play(store: &mut MemoryStore, id: TournamentId, pair: (PlayerId, PlayerId), a: i64, b: i64) {
    let m = find_match(store, id, pair.0, pair.1);
    record_match_result(store, m.id, a, b).unwrap();
}

fn row<'a>(standings: &'a [Standing], name: &str) -> &'a Standing {
    standings.iter().find(|s| s.player_name == name).unwrap()
}

#[test]
fn unknown_tournament_is_not_found() {
    let store = MemoryStore::new();
    let err = compute_leaderboard(&store, uuid::Uuid::new_v4()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn planning_tournament_has_zeroed_rows_in_admission_order() {
    let mut store = MemoryStore::new();
    let t = store.create_tournament().unwrap();
    for name in ["Zed", "Amy", "Kim"] {
        admit_participant(&mut store, t.id, name).unwrap();
    }
    let board = compute_leaderboard(&store, t.id).unwrap();
    assert_eq!(board.status, TournamentStatus::Planning);
    let names: Vec<_> = board.standings.iter().map(|s| s.player_name.as_str()).collect();
    assert_eq!(names, ["Zed", "Amy", "Kim"]);
    assert!(board
        .standings
        .iter()
        .all(|s| s.points == 0 && s.played == 0 && s.wins == 0 && s.draws == 0 && s.losses == 0));
}

#[test]
fn win_draw_loss_is_three_points() {
    let (mut store, id, p) = started(&["W", "X", "Y", "Z"]);
    play(&mut store, id, (p[0], p[1]), 5, 2);
    play(&mut store, id, (p[0], p[2]), 1, 1);
    play(&mut store, id, (p[0], p[3]), 0, 3);

    let board = compute_leaderboard(&store, id).unwrap();
    let w = row(&board.standings, "W");
    assert_eq!((w.points, w.played), (3, 3));
    assert_eq!((w.wins, w.draws, w.losses), (1, 1, 1));
}

#[test]
fn pending_matches_are_ignored() {
    let (mut store, id, p) = started(&["A", "B", "C"]);
    play(&mut store, id, (p[1], p[2]), 2, 0);

    let board = compute_leaderboard(&store, id).unwrap();
    assert_eq!(board.status, TournamentStatus::Started);
    let a = row(&board.standings, "A");
    assert_eq!((a.points, a.played), (0, 0));
    assert_eq!(board.standings[0].player_name, "B");
    assert_eq!(board.standings[0].points, 2);
}

#[test]
fn round_robin_of_three_end_to_end() {
    let (mut store, id, p) = started(&["Alice", "Bob", "Charlie"]);
    let matches = store.matches_by_tournament(id).unwrap();
    let pairs: Vec<_> = matches.iter().map(|m| (m.player_a_id, m.player_b_id)).collect();
    assert_eq!(pairs, vec![(p[0], p[1]), (p[0], p[2]), (p[1], p[2])]);

    record_match_result(&mut store, matches[0].id, 3, 1).unwrap();
    record_match_result(&mut store, matches[1].id, 2, 2).unwrap();
    record_match_result(&mut store, matches[2].id, 1, 4).unwrap();

    let board = compute_leaderboard(&store, id).unwrap();
    assert_eq!(board.status, TournamentStatus::Finished);

    let names: Vec<_> = board.standings.iter().map(|s| s.player_name.as_str()).collect();
    // Alice and Charlie tie on points and wins; admission order breaks the tie.
    assert_eq!(names, ["Alice", "Charlie", "Bob"]);

    let summary: Vec<_> = board
        .standings
        .iter()
        .map(|s| (s.points, s.played, s.wins, s.draws, s.losses))
        .collect();
    assert_eq!(summary, vec![(3, 2, 1, 1, 0), (3, 2, 1, 1, 0), (0, 2, 0, 0, 2)]);
}

#[test]
fn wins_break_ties_on_points() {
    // D draws twice (2 pts, 0 wins); A wins once (2 pts, 1 win). A must rank ahead of D.
    let (mut store, id, p) = started(&["D", "A", "X", "Y"]);
    play(&mut store, id, (p[0], p[2]), 1, 1);
    play(&mut store, id, (p[0], p[3]), 0, 0);
    play(&mut store, id, (p[1], p[2]), 4, 0);

    let board = compute_leaderboard(&store, id).unwrap();
    let top: Vec<_> = board.standings[..2]
        .iter()
        .map(|s| (s.player_name.as_str(), s.points, s.wins))
        .collect();
    assert_eq!(top, vec![("A", 2, 1), ("D", 2, 0)]);
}

#[test]
fn leaderboard_serializes_with_expected_fields() {
    let (store, id, _) = started(&["Alice", "Bob"]);
    let board = compute_leaderboard(&store, id).unwrap();
    let json = serde_json::to_value(&board).unwrap();
    assert_eq!(json["status"], "started");
    assert_eq!(json["leaderboard"][0]["player_name"], "Alice");
    for field in ["player_id", "points", "played", "wins", "draws", "losses"] {
        assert!(json["leaderboard"][0].get(field).is_some(), "missing {field}");
    }
}
