pub mod audio_match;
pub mod letter_choice;
pub mod repetition;
pub mod word_identity;
pub mod word_pairing;

pub use audio_match::AudioMatch;
pub use letter_choice::LetterChoice;
pub use repetition::RepetitionDrill;
pub use word_identity::WordIdentity;
pub use word_pairing::{Connection, WordPairing};

/// Lifecycle phase shared by every controller. Mutators are accepted only
/// in `Selecting`; after `Validated` the selection state is frozen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Selecting,
    Validated,
    Completed,
}

/// Outcome of one validation. Owned transiently by the controller and
/// reported upward through the event sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    pub correct: u32,
    pub total: u32,
}

/// Cursor movement for the controllers that navigate item by item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Seedable RNG for shuffles. Tests pass a seed for reproducible orders;
/// production hosts pass None.
pub(crate) fn seeded_rng(seed: Option<u64>) -> fastrand::Rng {
    match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    }
}
