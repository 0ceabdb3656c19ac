//! Session-best score tracking
//!
//! The engine exposes score changes through [`LockEvent`]s; the tracker is
//! the subscriber that turns them into "new best" notifications. Persisting
//! the best score is left to the caller.

use crate::types::LockEvent;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighScoreTracker {
    best: u32,
}

impl HighScoreTracker {
    pub fn new(previous_best: u32) -> Self {
        Self {
            best: previous_best,
        }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Record a score. Returns the new best when `score` beats it.
    pub fn observe(&mut self, score: u32) -> Option<u32> {
        if score > self.best {
            self.best = score;
            return Some(score);
        }
        None
    }

    pub fn observe_event(&mut self, event: &LockEvent) -> Option<u32> {
        self.observe(event.score)
    }
}
