//! Concurrent callers against one service: mutations on a tournament are serialized.

use round_robin_tournament::{
    ErrorKind, MemoryStore, TournamentService, TournamentStatus, MAX_PARTICIPANTS,
};
use std::sync::{Arc, Barrier};
use std::thread;

fn service() -> Arc<TournamentService<MemoryStore>> {
    Arc::new(TournamentService::new(MemoryStore::new()))
}

#[test]
fn concurrent_admissions_never_overshoot_capacity() {
    let svc = service();
    let id = svc.create_tournament().unwrap().id;
    let callers = 12;
    let barrier = Arc::new(Barrier::new(callers));

    let handles: Vec<_> = (0..callers)
        .map(|i| {
            let svc = Arc::clone(&svc);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                svc.admit_participant(id, &format!("Player{i}"))
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let admitted = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(admitted, MAX_PARTICIPANTS);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| e.kind() == ErrorKind::CapacityExceeded));
    assert_eq!(svc.list_participants(id).unwrap().len(), MAX_PARTICIPANTS);
}

#[test]
fn concurrent_same_name_admits_once() {
    let svc = service();
    let id = svc.create_tournament().unwrap().id;
    let callers = 8;
    let barrier = Arc::new(Barrier::new(callers));

    let handles: Vec<_> = (0..callers)
        .map(|_| {
            let svc = Arc::clone(&svc);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                svc.admit_participant(id, "Alice")
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| e.kind() == ErrorKind::DuplicateParticipant));
    assert_eq!(svc.list_participants(id).unwrap().len(), 1);
}

#[test]
fn concurrent_results_finish_exactly_once() {
    let svc = service();
    let id = svc.create_tournament().unwrap().id;
    for name in ["A", "B", "C", "D", "E"] {
        svc.admit_participant(id, name).unwrap();
    }
    svc.start_tournament(id).unwrap();
    let matches = svc.list_matches(id).unwrap();
    let barrier = Arc::new(Barrier::new(matches.len()));

    let handles: Vec<_> = matches
        .iter()
        .map(|m| {
            let svc = Arc::clone(&svc);
            let barrier = Arc::clone(&barrier);
            let match_id = m.id;
            thread::spawn(move || {
                barrier.wait();
                let board = svc.leaderboard(id).unwrap();
                // Each completed match counts for both players, so a consistent snapshot sums to an even total.
                let played: u32 = board.standings.iter().map(|s| s.played).sum();
                assert_eq!(played % 2, 0);
                svc.record_match_result(match_id, 2, 1)
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap().unwrap();
    }

    assert_eq!(svc.get_tournament(id).unwrap().status, TournamentStatus::Finished);
    let board = svc.leaderboard(id).unwrap();
    let played: u32 = board.standings.iter().map(|s| s.played).sum();
    assert_eq!(played as usize, matches.len() * 2);
}
