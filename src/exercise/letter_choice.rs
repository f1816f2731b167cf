use super::{seeded_rng, Direction, Phase, ScoreResult};
use crate::events::{EventSink, HostEvent};
use crate::items::{ItemId, LetterItem};
use crate::selection::ChoiceMap;

/// Letter-Choice exercise: each of N masked words needs one letter picked
/// from a shuffled pool of the correct letter plus decoys. Validation is
/// blocked (silently) until every item has a choice.
pub struct LetterChoice {
    items: Vec<LetterItem>,
    choices: ChoiceMap<ItemId, char>,
    cursor: usize,
    /// Shuffled pool for the item under the cursor. Recomputed when the
    /// cursor lands on an item, never on a selection.
    offered: Vec<char>,
    phase: Phase,
    score: Option<ScoreResult>,
    rng: fastrand::Rng,
}

impl LetterChoice {
    pub fn new(items: Vec<LetterItem>, seed: Option<u64>) -> Self {
        let mut rng = seeded_rng(seed);
        let offered = items
            .first()
            .map(|item| Self::shuffle_pool(item, &mut rng))
            .unwrap_or_default();
        Self {
            items,
            choices: ChoiceMap::new(),
            cursor: 0,
            offered,
            phase: Phase::Selecting,
            score: None,
            rng,
        }
    }

    fn shuffle_pool(item: &LetterItem, rng: &mut fastrand::Rng) -> Vec<char> {
        let mut pool = item.letter_pool();
        rng.shuffle(&mut pool);
        pool
    }

    pub fn items(&self) -> &[LetterItem] {
        &self.items
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_item(&self) -> Option<&LetterItem> {
        self.items.get(self.cursor)
    }

    /// Letters offered for the item under the cursor, in display order.
    pub fn offered_letters(&self) -> &[char] {
        &self.offered
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> Option<ScoreResult> {
        self.score
    }

    pub fn choice(&self, id: ItemId) -> Option<char> {
        self.choices.get(&id).copied()
    }

    /// Records the user's letter for an item, overwriting any prior
    /// choice. Ignored after validation or for unknown ids.
    pub fn select_letter(&mut self, id: ItemId, letter: char) {
        if self.phase != Phase::Selecting {
            return;
        }
        if self.items.iter().any(|item| item.id == id) {
            self.choices.assign(id, letter);
        }
    }

    /// Moves the cursor, clamped to [0, N-1]. Selection state is
    /// untouched; the offered pool reshuffles on a cursor change while
    /// still selecting.
    pub fn navigate(&mut self, direction: Direction) {
        if self.items.is_empty() {
            return;
        }
        let target = match direction {
            Direction::Next => (self.cursor + 1).min(self.items.len() - 1),
            Direction::Prev => self.cursor.saturating_sub(1),
        };
        if target != self.cursor {
            self.cursor = target;
            if self.phase == Phase::Selecting {
                self.offered = Self::shuffle_pool(&self.items[target], &mut self.rng);
            }
        }
    }

    /// Scores the attempt if every item has a choice; otherwise a silent
    /// no-op. Letter comparison is case-insensitive. Emits the score
    /// exactly once.
    pub fn validate(&mut self, events: &mut dyn EventSink) {
        if self.phase != Phase::Selecting {
            return;
        }
        if self.items.iter().any(|item| !self.choices.contains(&item.id)) {
            return;
        }
        let correct = self
            .items
            .iter()
            .filter(|item| {
                self.choices
                    .get(&item.id)
                    .is_some_and(|&c| chars_eq_ignore_case(c, item.correct_letter))
            })
            .count() as u32;
        let total = self.items.len() as u32;
        self.score = Some(ScoreResult { correct, total });
        self.phase = Phase::Validated;
        events.emit(HostEvent::ScoreSubmitted { correct, total });
    }

    /// Clears all choices, resets the cursor to the first item, and
    /// returns to the selecting phase.
    pub fn retry(&mut self, events: &mut dyn EventSink) {
        if self.phase != Phase::Validated {
            return;
        }
        self.choices.clear();
        self.score = None;
        self.cursor = 0;
        self.phase = Phase::Selecting;
        if let Some(first) = self.items.first() {
            self.offered = Self::shuffle_pool(first, &mut self.rng);
        }
        events.emit(HostEvent::Retried);
    }

    /// Dismisses the results view. Only meaningful once validated.
    pub fn finish(&mut self, events: &mut dyn EventSink) {
        if self.phase != Phase::Validated {
            return;
        }
        self.phase = Phase::Completed;
        events.emit(HostEvent::Completed);
    }
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
