use super::{Phase, ScoreResult};
use crate::audio::{AudioSink, Playback};
use crate::events::{EventSink, ExerciseWarning, HostEvent};
use crate::items::{AudioMatchItem, ItemId};
use crate::selection::ToggleSet;

/// Audio-Match exercise: select the subset of images whose `is_correct`
/// flag is set after listening to the cues. Scoring is asymmetric: the
/// denominator is the target set size, not the item count, and false
/// positives inflate neither side of the ratio.
pub struct AudioMatch {
    items: Vec<AudioMatchItem>,
    selected: ToggleSet<ItemId>,
    playback: Playback,
    phase: Phase,
    score: Option<ScoreResult>,
}

impl AudioMatch {
    pub fn new(items: Vec<AudioMatchItem>) -> Self {
        Self {
            items,
            selected: ToggleSet::new(),
            playback: Playback::new(),
            phase: Phase::Selecting,
            score: None,
        }
    }

    pub fn items(&self) -> &[AudioMatchItem] {
        &self.items
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> Option<ScoreResult> {
        self.score
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selected.contains(&id)
    }

    pub fn selection_len(&self) -> usize {
        self.selected.len()
    }

    pub fn playing(&self) -> Option<ItemId> {
        self.playback.current()
    }

    /// Flips membership of an item in the selection set. Ignored after
    /// validation or for unknown ids.
    pub fn toggle_selection(&mut self, id: ItemId) {
        if self.phase != Phase::Selecting {
            return;
        }
        if self.items.iter().any(|item| item.id == id) {
            self.selected.toggle(id);
        }
    }

    /// Plays an item's cue. Allowed in any phase; playback never affects
    /// scoring or transitions.
    pub fn play_item(&mut self, id: ItemId, sink: &dyn AudioSink) {
        if let Some(item) = self.items.iter().find(|item| item.id == id) {
            self.playback.start(item.id, &item.audio, sink);
        }
    }

    pub fn mark_audio_ended(&mut self, id: ItemId) {
        self.playback.mark_ended(id);
    }

    /// Scores the attempt. An empty selection is refused with a warning
    /// to the host (unlike Letter-Choice, which blocks silently).
    /// `correct` counts selected target items; `total` is the target set
    /// size. Emits the score exactly once.
    pub fn validate(&mut self, events: &mut dyn EventSink) {
        if self.phase != Phase::Selecting {
            return;
        }
        if self.selected.is_empty() {
            events.emit(HostEvent::Warned(ExerciseWarning::EmptySelection));
            return;
        }
        let correct = self
            .items
            .iter()
            .filter(|item| item.is_correct && self.selected.contains(&item.id))
            .count() as u32;
        let total = self.items.iter().filter(|item| item.is_correct).count() as u32;
        self.score = Some(ScoreResult { correct, total });
        self.phase = Phase::Validated;
        events.emit(HostEvent::ScoreSubmitted { correct, total });
    }

    /// Stricter predicate than the score ratio: true iff every item's
    /// selection matches its flag exactly.
    pub fn all_correct(&self) -> bool {
        self.items
            .iter()
            .all(|item| item.is_correct == self.selected.contains(&item.id))
    }

    pub fn retry(&mut self, events: &mut dyn EventSink) {
        if self.phase != Phase::Validated {
            return;
        }
        self.selected.clear();
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
