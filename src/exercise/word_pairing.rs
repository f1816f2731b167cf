use super::{seeded_rng, Phase, ScoreResult};
use crate::events::{EventSink, HostEvent};
use crate::items::WordPair;

/// A user-declared association between a left item (pair-list order) and a
/// right item (shuffled display order). At most one connection per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub left: usize,
    pub right: usize,
}

/// Word-Pairing exercise: connect each left word to the right word it was
/// originally paired with. The right column is a permutation of the right
/// texts computed once at creation; retry keeps it stable.
pub struct WordPairing {
    pairs: Vec<WordPair>,
    /// Right-hand display order: a permutation of the pairs' right texts.
    right_order: Vec<String>,
    armed: Option<usize>,
    connections: Vec<Connection>,
    phase: Phase,
    score: Option<ScoreResult>,
}

impl WordPairing {
    pub fn new(pairs: Vec<WordPair>, seed: Option<u64>) -> Self {
        let mut rng = seeded_rng(seed);
        let mut right_order: Vec<String> = pairs.iter().map(|p| p.right.clone()).collect();
        rng.shuffle(&mut right_order);
        Self {
            pairs,
            right_order,
            armed: None,
            connections: Vec::new(),
            phase: Phase::Selecting,
            score: None,
        }
    }

    pub fn pairs(&self) -> &[WordPair] {
        &self.pairs
    }

    pub fn right_order(&self) -> &[String] {
        &self.right_order
    }

    pub fn armed(&self) -> Option<usize> {
        self.armed
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn connection_for_left(&self, left: usize) -> Option<Connection> {
        self.connections.iter().copied().find(|c| c.left == left)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> Option<ScoreResult> {
        self.score
    }

    /// Arms a left item for connection. Arming the already-armed index
    /// disarms it; arming a new index drops that left's existing
    /// connection and replaces any previously armed index.
    pub fn arm_left(&mut self, left: usize) {
        if self.phase != Phase::Selecting || left >= self.pairs.len() {
            return;
        }
        if self.armed == Some(left) {
            self.armed = None;
            return;
        }
        self.connections.retain(|c| c.left != left);
        self.armed = Some(left);
    }

    /// Connects the armed left item to a right item, evicting any prior
    /// connection on either side, then disarms. No-op when nothing is
    /// armed or after validation.
    pub fn connect_to_right(&mut self, right: usize) {
        if self.phase != Phase::Selecting || right >= self.right_order.len() {
            return;
        }
        let Some(left) = self.armed else {
            return;
        };
        self.connections
            .retain(|c| c.right != right && c.left != left);
        self.connections.push(Connection { left, right });
        self.armed = None;
    }

    /// Scores whatever connections exist: a connection is correct iff the
    /// right item's text equals the original paired right text (lookup by
    /// value, since the right column was shuffled). `total` is the full
    /// pair count; unmade connections are incorrect by omission. Emits
    /// the score exactly once.
    pub fn validate(&mut self, events: &mut dyn EventSink) {
        if self.phase != Phase::Selecting {
            return;
        }
        let correct = self
            .connections
            .iter()
            .filter(|c| self.right_order[c.right] == self.pairs[c.left].right)
            .count() as u32;
        let total = self.pairs.len() as u32;
        self.score = Some(ScoreResult { correct, total });
        self.phase = Phase::Validated;
        events.emit(HostEvent::ScoreSubmitted { correct, total });
    }

    /// Clears connections and the armed index. The right-column shuffle
    /// from creation is kept.
    pub fn retry(&mut self, events: &mut dyn EventSink) {
        if self.phase != Phase::Validated {
            return;
        }
        self.connections.clear();
        self.armed = None;
        self.score = None;
        self.phase = Phase::Selecting;
        events.emit(HostEvent::Retried);
    }

    pub fn finish(&mut self, events: &mut dyn EventSink) {
        if self.phase != Phase::Validated {
            return;
        }
        self.phase = Phase::Completed;
        events.emit(HostEvent::Completed);
    }
}
