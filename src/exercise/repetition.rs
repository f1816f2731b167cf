use super::{Phase, ScoreResult};
use crate::audio::{AudioSink, Playback};
use crate::events::{EventSink, HostEvent};
use crate::items::{ItemId, RepetitionWord};

/// Repetition drill: every word must be played `required` times before the
/// drill can complete. There is no correct/incorrect notion, only
/// completion; finishing emits full credit `(N, N)`.
pub struct RepetitionDrill {
    words: Vec<RepetitionWord>,
    required: u32,
    /// Per-word play counter, clamped to [0, required].
    counts: Vec<u32>,
    cursor: usize,
    playback: Playback,
    phase: Phase,
    score: Option<ScoreResult>,
}

impl RepetitionDrill {
    pub fn new(words: Vec<RepetitionWord>, required_repetitions: u32) -> Self {
        let counts = vec![0; words.len()];
        Self {
            words,
            required: required_repetitions.max(1),
            counts,
            cursor: 0,
            playback: Playback::new(),
            phase: Phase::Selecting,
            score: None,
        }
    }

    pub fn words(&self) -> &[RepetitionWord] {
        &self.words
    }

    pub fn required_repetitions(&self) -> u32 {
        self.required
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_word(&self) -> Option<&RepetitionWord> {
        self.words.get(self.cursor)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> Option<ScoreResult> {
        self.score
    }

    pub fn play_count(&self, index: usize) -> u32 {
        self.counts.get(index).copied().unwrap_or(0)
    }

    pub fn playing(&self) -> Option<ItemId> {
        self.playback.current()
    }

    pub fn word_complete(&self, index: usize) -> bool {
        self.play_count(index) >= self.required
    }

    pub fn all_complete(&self) -> bool {
        !self.words.is_empty() && self.counts.iter().all(|&c| c >= self.required)
    }

    /// Plays the word under the cursor. The counter increments up to the
    /// cap; audio still plays beyond it.
    pub fn play_current(&mut self, sink: &dyn AudioSink) {
        if self.phase == Phase::Completed {
            return;
        }
        let Some(word) = self.words.get(self.cursor) else {
            return;
        };
        if self.counts[self.cursor] < self.required {
            self.counts[self.cursor] += 1;
        }
        self.playback.start(word.id, &word.audio, sink);
    }

    pub fn mark_audio_ended(&mut self, id: ItemId) {
        self.playback.mark_ended(id);
    }

    /// Advances the cursor. On the last word with every counter at the
    /// cap, completes the drill and emits `(N, N)` exactly once; on the
    /// last word while incomplete, a no-op. Skipping ahead past
    /// incomplete words is allowed.
    pub fn next(&mut self, events: &mut dyn EventSink) {
        if self.phase == Phase::Completed || self.words.is_empty() {
            return;
        }
        if self.cursor + 1 < self.words.len() {
            self.cursor += 1;
            return;
        }
        if self.all_complete() {
            let n = self.words.len() as u32;
            self.score = Some(ScoreResult {
                correct: n,
                total: n,
            });
            self.phase = Phase::Completed;
            events.emit(HostEvent::ScoreSubmitted {
                correct: n,
                total: n,
            });
            events.emit(HostEvent::Completed);
        }
    }

    /// Moves the cursor back; never resets counters.
    pub fn previous(&mut self) {
        if self.phase == Phase::Completed {
            return;
        }
        self.cursor = self.cursor.saturating_sub(1);
    }
}
