// Per-word countdown for timed rounds.
//
// The clock restarts every time a word is accepted. A submission made after
// the clock ran out ends the round and is not checked.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    per_word: Duration,
    deadline: Instant,
}

impl Countdown {
    pub fn new(per_word: Duration) -> Self {
        Self::new_at(per_word, Instant::now())
    }

    pub fn new_at(per_word: Duration, now: Instant) -> Self {
        Self {
            per_word,
            deadline: now + per_word,
        }
    }

    pub fn per_word(&self) -> Duration {
        self.per_word
    }

    /// Give the player a fresh `per_word` from now.
    pub fn restart(&mut self) {
        self.restart_at(Instant::now());
    }

    pub fn restart_at(&mut self, now: Instant) {
        self.deadline = now + self.per_word;
    }

    pub fn remaining(&self) -> Duration {
        self.remaining_at(Instant::now())
    }

    pub fn remaining_at(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }

    pub fn expired(&self) -> bool {
        self.expired_at(Instant::now())
    }

    pub fn expired_at(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

/// Parse the `--time` value: a positive whole number of seconds.
pub fn parse_time_per_word(value: &str) -> Result<Duration, String> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err("time per word must be greater than zero".to_string()),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(_) => Err(format!("invalid time per word: {value:?} (expected whole seconds)")),
    }
}
