use crate::audio::AudioSink;
use crate::events::EventSink;
use crate::exercise::{
    AudioMatch, LetterChoice, Phase, RepetitionDrill, ScoreResult, WordIdentity, WordPairing,
};
use crate::items::ExerciseSpec;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

/// Type tag attached to an exercise definition. String forms match the
/// `kind` tag in definition files.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum ExerciseKind {
    LetterChoice,
    AudioMatch,
    RepetitionDrill,
    WordIdentity,
    WordPairing,
}

impl ExerciseSpec {
    pub fn kind(&self) -> ExerciseKind {
        match self {
            ExerciseSpec::LetterChoice { .. } => ExerciseKind::LetterChoice,
            ExerciseSpec::AudioMatch { .. } => ExerciseKind::AudioMatch,
            ExerciseSpec::RepetitionDrill { .. } => ExerciseKind::RepetitionDrill,
            ExerciseSpec::WordIdentity { .. } => ExerciseKind::WordIdentity,
            ExerciseSpec::WordPairing { .. } => ExerciseKind::WordPairing,
        }
    }

    /// Number of scoreable units in the definition.
    pub fn item_count(&self) -> usize {
        match self {
            ExerciseSpec::LetterChoice { items } => items.len(),
            ExerciseSpec::AudioMatch { items } => items.len(),
            ExerciseSpec::RepetitionDrill { words, .. } => words.len(),
            ExerciseSpec::WordIdentity { sequences } => {
                sequences.iter().map(|s| s.others.len()).sum()
            }
            ExerciseSpec::WordPairing { pairs } => pairs.len(),
        }
    }
}

/// One mounted exercise attempt behind the common lifecycle. The host
/// interacts with the variant-specific controller for selection and with
/// this wrapper for validation, retry, and completion.
pub enum AnyController {
    LetterChoice(LetterChoice),
    AudioMatch(AudioMatch),
    RepetitionDrill(RepetitionDrill),
    WordIdentity(WordIdentity),
    WordPairing(WordPairing),
}

impl AnyController {
    /// Mounts the controller matching the definition's kind. The seed
    /// feeds the shuffling controllers; the rest ignore it.
    pub fn from_spec(spec: ExerciseSpec, seed: Option<u64>) -> Self {
        let kind = spec.kind();
        debug!("mounting controller for kind {}", kind);
        match spec {
            ExerciseSpec::LetterChoice { items } => {
                AnyController::LetterChoice(LetterChoice::new(items, seed))
            }
            ExerciseSpec::AudioMatch { items } => AnyController::AudioMatch(AudioMatch::new(items)),
            ExerciseSpec::RepetitionDrill {
                words,
                required_repetitions,
            } => AnyController::RepetitionDrill(RepetitionDrill::new(words, required_repetitions)),
            ExerciseSpec::WordIdentity { sequences } => {
                AnyController::WordIdentity(WordIdentity::new(sequences))
            }
            ExerciseSpec::WordPairing { pairs } => {
                AnyController::WordPairing(WordPairing::new(pairs, seed))
            }
        }
    }

    pub fn kind(&self) -> ExerciseKind {
        match self {
            AnyController::LetterChoice(_) => ExerciseKind::LetterChoice,
            AnyController::AudioMatch(_) => ExerciseKind::AudioMatch,
            AnyController::RepetitionDrill(_) => ExerciseKind::RepetitionDrill,
            AnyController::WordIdentity(_) => ExerciseKind::WordIdentity,
            AnyController::WordPairing(_) => ExerciseKind::WordPairing,
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            AnyController::LetterChoice(c) => c.phase(),
            AnyController::AudioMatch(c) => c.phase(),
            AnyController::RepetitionDrill(c) => c.phase(),
            AnyController::WordIdentity(c) => c.phase(),
            AnyController::WordPairing(c) => c.phase(),
        }
    }

    pub fn score(&self) -> Option<ScoreResult> {
        match self {
            AnyController::LetterChoice(c) => c.score(),
            AnyController::AudioMatch(c) => c.score(),
            AnyController::RepetitionDrill(c) => c.score(),
            AnyController::WordIdentity(c) => c.score(),
            AnyController::WordPairing(c) => c.score(),
        }
    }

    /// Validation for the selection-based controllers. The repetition
    /// drill has no validate step (it completes through `next`), so the
    /// call is a no-op there.
    pub fn validate(&mut self, events: &mut dyn EventSink) {
        match self {
            AnyController::LetterChoice(c) => c.validate(events),
            AnyController::AudioMatch(c) => c.validate(events),
            AnyController::RepetitionDrill(_) => {}
            AnyController::WordIdentity(c) => c.validate(events),
            AnyController::WordPairing(c) => c.validate(events),
        }
    }

    /// Retry for the controllers that support another attempt. The
    /// repetition drill has no retry notion.
    pub fn retry(&mut self, events: &mut dyn EventSink) {
        match self {
            AnyController::LetterChoice(c) => c.retry(events),
            AnyController::AudioMatch(c) => c.retry(events),
            AnyController::RepetitionDrill(_) => {}
            AnyController::WordIdentity(c) => c.retry(events),
            AnyController::WordPairing(c) => c.retry(events),
        }
    }

    /// Results-view dismissal. The repetition drill emits its completion
    /// from `next` directly.
    pub fn finish(&mut self, events: &mut dyn EventSink) {
        match self {
            AnyController::LetterChoice(c) => c.finish(events),
            AnyController::AudioMatch(c) => c.finish(events),
            AnyController::RepetitionDrill(_) => {}
            AnyController::WordIdentity(c) => c.finish(events),
            AnyController::WordPairing(c) => c.finish(events),
        }
    }

    /// Best-effort playback-ended notification for the audio-backed
    /// controllers.
    pub fn mark_audio_ended(&mut self, id: crate::items::ItemId) {
        match self {
            AnyController::AudioMatch(c) => c.mark_audio_ended(id),
            AnyController::RepetitionDrill(c) => c.mark_audio_ended(id),
            _ => {}
        }
    }

    /// Plays an item's cue where the variant carries audio.
    pub fn play_item(&mut self, id: crate::items::ItemId, sink: &dyn AudioSink) {
        if let AnyController::AudioMatch(c) = self {
            c.play_item(id, sink);
        }
    }
}
