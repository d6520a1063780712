use std::sync::mpsc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use blitz::game::{Game, Phase};
use blitz::pool::Vocabulary;
use blitz::runtime::{EventSource, GameEvent, TestEvents};

fn key(c: char) -> GameEvent {
    GameEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

// Headless integration using the event-source seam without a TTY:
// drive a whole round through the same event vocabulary the binary uses.
#[test]
fn headless_round_completes_by_exhaustion() {
    let mut game = Game::new(vec!["ai".to_string(), "data".to_string()], 15);
    game.start();

    let (tx, rx) = mpsc::channel();
    for c in "ai".chars() {
        tx.send(key(c)).unwrap();
    }
    tx.send(key(' ')).unwrap();
    tx.send(GameEvent::Tick).unwrap();
    for c in "xyz".chars() {
        tx.send(key(c)).unwrap();
    }
    tx.send(key(' ')).unwrap();
    drop(tx);

    let source = TestEvents::new(rx);
    while let Some(event) = source.next() {
        match event {
            GameEvent::Tick => game.on_tick(),
            GameEvent::Resize => {}
            GameEvent::Key(key) => match key.code {
                KeyCode::Char(' ') => {
                    game.commit_word();
                }
                KeyCode::Char(c) => game.write(c),
                _ => {}
            },
        }
        if game.has_ended() {
            break;
        }
    }

    assert_eq!(game.phase, Phase::Ended);
    assert_eq!(game.score, 1);
    assert_eq!(game.current_index, 2);
    assert!(game.completed.contains(&0));
    assert!(game.skipped.contains(&1));
    assert_eq!(game.time_left, 14);
}

#[test]
fn headless_round_finishes_by_timeout() {
    let mut game = Game::new(vec!["hello".to_string()], 3);
    game.start();

    let (tx, rx) = mpsc::channel();
    tx.send(key('h')).unwrap();
    for _ in 0..5 {
        tx.send(GameEvent::Tick).unwrap();
    }
    drop(tx);

    let source = TestEvents::new(rx);
    while let Some(event) = source.next() {
        match event {
            GameEvent::Tick => game.on_tick(),
            GameEvent::Key(key) => {
                if let KeyCode::Char(c) = key.code {
                    game.write(c);
                }
            }
            GameEvent::Resize => {}
        }
        if game.has_ended() {
            break;
        }
    }

    assert!(game.has_ended(), "round should finish by timeout");
    assert_eq!(game.time_left, 0);
    assert_eq!(game.score, 0);
    // the half-typed word was never committed
    assert!(game.completed.is_empty());
    assert!(game.skipped.is_empty());
}

#[test]
fn headless_round_over_drawn_vocabulary() {
    let vocab = Vocabulary::new("buzzwords");
    let round = vocab.draw_round();
    let mut game = Game::new(round.clone(), 60);
    game.start();

    // type every word correctly, committing each one
    for word in &round {
        for c in word.chars() {
            game.write(c);
        }
        game.commit_word();
    }

    assert!(game.has_ended());
    assert_eq!(game.score as usize, round.len());
    assert_eq!(game.completed.len(), round.len());
    assert!(game.skipped.is_empty());
}
