use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent};

/// Unified event type consumed by the game loop.
#[derive(Clone, Debug)]
pub enum GameEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Source of game loop events (keyboard, resize, clock).
pub trait EventSource: Send + 'static {
    /// Blocks for the next event. None means the source is exhausted and
    /// the loop should exit.
    fn next(&self) -> Option<GameEvent>;
}

/// Production event source: a crossterm input reader thread and a dedicated
/// ticker thread, merged over one channel. The ticker runs on its own
/// thread so a burst of typing can never stall the countdown. Both threads
/// exit once the receiver is dropped.
pub struct TerminalEvents {
    rx: Receiver<GameEvent>,
}

impl TerminalEvents {
    pub fn spawn(tick_interval: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        let tick_tx = tx.clone();
        thread::spawn(move || loop {
            thread::sleep(tick_interval);
            if tick_tx.send(GameEvent::Tick).is_err() {
                break;
            }
        });

        thread::spawn(move || loop {
            match event::read() {
                Ok(CtEvent::Key(key)) => {
                    if tx.send(GameEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(CtEvent::Resize(_, _)) => {
                    if tx.send(GameEvent::Resize).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        });

        Self { rx }
    }
}

impl EventSource for TerminalEvents {
    fn next(&self) -> Option<GameEvent> {
        self.rx.recv().ok()
    }
}

/// Scripted event source for headless tests: events are whatever the test
/// pushes into the channel, in order.
pub struct TestEvents {
    rx: Receiver<GameEvent>,
}

impl TestEvents {
    pub fn new(rx: Receiver<GameEvent>) -> Self {
        Self { rx }
    }
}

impl EventSource for TestEvents {
    fn next(&self) -> Option<GameEvent> {
        self.rx.recv().ok()
    }
}
