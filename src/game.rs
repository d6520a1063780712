use std::collections::HashSet;

/// Where a round is in its life.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Round drawn, clock not running; the first keypress starts it.
    Idle,
    /// Clock running, input applied.
    Active,
    /// Clock hit zero or every word was attempted.
    Ended,
}

/// Per-character classification of typed input against the target word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

/// Display status of one word in the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordStatus {
    Completed,
    Skipped,
    Active,
    Pending,
}

/// What happened when the current input was committed against a word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommitOutcome {
    pub word: String,
    pub typed: String,
    pub correct: bool,
}

/// One round of the word blitz: a shuffled word sequence, a cursor over it,
/// the partial input for the word under the cursor, and a countdown.
///
/// Mutators are total: calls that don't apply in the current phase are
/// silent no-ops, never errors.
#[derive(Clone, Debug)]
pub struct Game {
    pub words: Vec<String>,
    pub current_index: usize,
    pub current_input: String,
    pub score: u32,
    pub time_left: u32,
    pub duration_secs: u32,
    pub phase: Phase,
    pub completed: HashSet<usize>,
    pub skipped: HashSet<usize>,
}

impl Game {
    pub fn new(words: Vec<String>, duration_secs: u32) -> Self {
        Self {
            words,
            current_index: 0,
            current_input: String::new(),
            score: 0,
            time_left: duration_secs,
            duration_secs,
            phase: Phase::Idle,
            completed: HashSet::new(),
            skipped: HashSet::new(),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn has_ended(&self) -> bool {
        self.phase == Phase::Ended
    }

    /// Starts (or restarts) the round over the current word sequence.
    /// Returns false without touching anything when already running.
    pub fn start(&mut self) -> bool {
        if self.is_active() {
            return false;
        }

        self.score = 0;
        self.time_left = self.duration_secs;
        self.current_index = 0;
        self.current_input.clear();
        self.completed.clear();
        self.skipped.clear();
        self.phase = Phase::Active;
        true
    }

    /// One second elapsed. The only time-driven transition: at zero the
    /// round ends. Ticks outside Active never mutate anything, so a tick
    /// that raced a reset is harmless.
    pub fn on_tick(&mut self) {
        if !self.is_active() {
            return;
        }

        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.phase = Phase::Ended;
        }
    }

    pub fn write(&mut self, c: char) {
        if !self.is_active() {
            return;
        }
        self.current_input.push(c);
    }

    pub fn backspace(&mut self) {
        if !self.is_active() {
            return;
        }
        self.current_input.pop();
    }

    /// Submits the current input against the active word. An exact
    /// case-insensitive match scores; anything else (partial, wrong, or
    /// empty) skips the word. Either way the cursor advances and the input
    /// buffer is cleared; attempting the last word ends the round.
    pub fn commit_word(&mut self) -> Option<CommitOutcome> {
        if !self.is_active() {
            return None;
        }

        let word = self.words[self.current_index].clone();
        let correct = attempt_matches(&self.current_input, &word);

        if correct {
            self.score += 1;
            self.completed.insert(self.current_index);
        } else {
            self.skipped.insert(self.current_index);
        }

        let typed = std::mem::take(&mut self.current_input);
        self.current_index += 1;

        if self.current_index == self.words.len() {
            self.phase = Phase::Ended;
        }

        Some(CommitOutcome {
            word,
            typed,
            correct,
        })
    }

    pub fn active_word(&self) -> Option<&str> {
        self.words.get(self.current_index).map(String::as_str)
    }

    pub fn word_status(&self, index: usize) -> WordStatus {
        if self.completed.contains(&index) {
            WordStatus::Completed
        } else if self.skipped.contains(&index) {
            WordStatus::Skipped
        } else if index == self.current_index && !self.has_ended() {
            WordStatus::Active
        } else {
            WordStatus::Pending
        }
    }
}

/// Exact, case-insensitive word equality. No trimming: a trailing space
/// makes the attempt wrong.
pub fn attempt_matches(typed: &str, target: &str) -> bool {
    typed.to_lowercase() == target.to_lowercase()
}

/// Classifies each typed character against the target word. Positions past
/// the target's length are always incorrect; positions past the typed length
/// are "remaining" and simply absent from the result. Recomputed from
/// scratch on every render so backspace retroactively declassifies.
pub fn classify(typed: &str, target: &str) -> Vec<Outcome> {
    let target_chars: Vec<char> = target.chars().collect();
    typed
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let correct = target_chars
                .get(i)
                .map_or(false, |t| c.to_lowercase().eq(t.to_lowercase()));
            if correct {
                Outcome::Correct
            } else {
                Outcome::Incorrect
            }
        })
        .collect()
}
