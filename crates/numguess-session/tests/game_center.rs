//! Integration tests for the game center under concurrent requests.

use std::sync::Arc;
use std::thread;

use numguess_game::{GuessOutcome, MAX_ATTEMPTS};
use numguess_session::{GameCenter, MemorySessionStore, SessionConfig, SessionId};

fn center() -> GameCenter {
    GameCenter::new(MemorySessionStore::new(SessionConfig {
        idle_timeout_secs: 3600,
    }))
}

#[test]
fn test_concurrent_end_counts_every_call() {
    const SESSIONS: usize = 64;
    const ROUNDS: usize = 10;

    let center = center();
    let ids: Vec<SessionId> =
        (0..SESSIONS).map(|_| center.store().open(None)).collect();

    thread::scope(|s| {
        for id in &ids {
            let center = &center;
            s.spawn(move || {
                for _ in 0..ROUNDS {
                    center.get(Some(id)).unwrap();
                    center.end(Some(id)).unwrap();
                }
            });
        }
    });

    assert_eq!(center.total_games(), (SESSIONS * ROUNDS) as u64);
    assert_eq!(
        center.game_stats_message(),
        format!("There have been {} games played.", SESSIONS * ROUNDS)
    );
}

#[test]
fn test_concurrent_get_same_session_agrees_on_one_game() {
    let center = center();
    let id = center.store().open(None);

    let games: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..16)
            .map(|_| s.spawn(|| center.get(Some(&id)).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for game in &games[1..] {
        assert!(Arc::ptr_eq(&games[0], game));
    }
}

#[test]
fn test_full_round_play_to_the_end_then_restart() {
    // Simulates a player guessing 0, 1, 2 against a random target: the
    // round ends one way or the other, and the next visit starts over.
    let center = center();
    let id = center.store().open(None);
    let game = center.get(Some(&id)).unwrap();

    let mut outcome = None;
    let mut value = 0;
    while game.has_more_guesses() {
        let result = game.submit(value).unwrap();
        value += 1;
        if result.ends_game() {
            outcome = Some(result);
            break;
        }
    }

    assert!(matches!(outcome, Some(GuessOutcome::Won | GuessOutcome::Lost)));
    center.end(Some(&id)).unwrap();
    assert_eq!(center.game_stats_message(), "One game has been played so far.");

    let next = center.get(Some(&id)).unwrap();
    assert!(!Arc::ptr_eq(&game, &next));
    assert_eq!(next.guesses_left(), MAX_ATTEMPTS);
}
