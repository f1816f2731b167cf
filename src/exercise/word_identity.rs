use super::{Phase, ScoreResult};
use crate::events::{EventSink, HostEvent};
use crate::items::WordSequence;
use crate::selection::ToggleSet;

/// Word-Identity exercise: for each model word, circle the candidates
/// that are lexically identical to it. Every candidate counts toward the
/// denominator, and correctly leaving a decoy unselected scores as a hit.
pub struct WordIdentity {
    sequences: Vec<WordSequence>,
    /// One toggle set per sequence, keyed by candidate index.
    selected: Vec<ToggleSet<usize>>,
    phase: Phase,
    score: Option<ScoreResult>,
}

impl WordIdentity {
    pub fn new(sequences: Vec<WordSequence>) -> Self {
        let selected = sequences.iter().map(|_| ToggleSet::new()).collect();
        Self {
            sequences,
            selected,
            phase: Phase::Selecting,
            score: None,
        }
    }

    pub fn sequences(&self) -> &[WordSequence] {
        &self.sequences
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> Option<ScoreResult> {
        self.score
    }

    pub fn is_selected(&self, seq_index: usize, candidate_index: usize) -> bool {
        self.selected
            .get(seq_index)
            .is_some_and(|s| s.contains(&candidate_index))
    }

    /// Flips one candidate's selection within its sequence. Ignored after
    /// validation or for out-of-range indices.
    pub fn toggle_candidate(&mut self, seq_index: usize, candidate_index: usize) {
        if self.phase != Phase::Selecting {
            return;
        }
        let Some(seq) = self.sequences.get(seq_index) else {
            return;
        };
        if candidate_index >= seq.others.len() {
            return;
        }
        self.selected[seq_index].toggle(candidate_index);
    }

    /// Scores every candidate across every sequence. No precondition:
    /// validating with zero selections is legal (and scores the decoys as
    /// correctly left alone). Emits the score exactly once.
    pub fn validate(&mut self, events: &mut dyn EventSink) {
        if self.phase != Phase::Selecting {
            return;
        }
        let mut correct = 0u32;
        let mut total = 0u32;
        for (si, seq) in self.sequences.iter().enumerate() {
            for (ci, other) in seq.others.iter().enumerate() {
                total += 1;
                if other.is_valid == self.selected[si].contains(&ci) {
                    correct += 1;
                }
            }
        }
        self.score = Some(ScoreResult { correct, total });
        self.phase = Phase::Validated;
        events.emit(HostEvent::ScoreSubmitted { correct, total });
    }

    /// Clears the selections of every sequence.
    pub fn retry(&mut self, events: &mut dyn EventSink) {
        if self.phase != Phase::Validated {
            return;
        }
        for set in &mut self.selected {
            set.clear();
        }
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
