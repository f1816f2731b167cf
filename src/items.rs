use serde::{Deserialize, Serialize};

/// Identifier for one unit of exercise content. Unique within an exercise.
pub type ItemId = u32;

/// One image/word with a single masked letter the user must supply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LetterItem {
    pub id: ItemId,
    pub image: String,
    pub text: String,
    /// Character index (not byte index) of the hidden letter.
    pub masked_position: usize,
    pub correct_letter: char,
    #[serde(default)]
    pub decoy_letters: Vec<char>,
}

impl LetterItem {
    /// Display form with the masked character replaced by "...".
    pub fn masked_text(&self) -> String {
        let chars: Vec<char> = self.text.chars().collect();
        let mut out = String::with_capacity(self.text.len() + 2);
        out.extend(chars.iter().take(self.masked_position));
        out.push_str("...");
        out.extend(chars.iter().skip(self.masked_position + 1));
        out
    }

    /// Letters offered to the user: correct letter plus decoys, deduplicated.
    /// Order here is definition order; controllers shuffle per visit.
    pub fn letter_pool(&self) -> Vec<char> {
        let mut pool = vec![self.correct_letter];
        for &d in &self.decoy_letters {
            if !pool.contains(&d) {
                pool.push(d);
            }
        }
        pool
    }
}

/// One selectable image with an audio cue. The target set is the subset
/// where `is_correct` is true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioMatchItem {
    pub id: ItemId,
    pub image: String,
    pub audio: String,
    pub is_correct: bool,
}

/// One word of a repetition drill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepetitionWord {
    pub id: ItemId,
    pub text: String,
    pub audio: String,
}

/// A candidate word shown next to a model word. `is_valid` marks lexical
/// identity with the model; invalid candidates are near-miss decoys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtherWord {
    pub word: String,
    pub is_valid: bool,
}

/// A model word plus its candidate list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordSequence {
    pub model: String,
    pub others: Vec<OtherWord>,
}

/// The correct left-to-right association in the pairing exercise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordPair {
    pub left: String,
    pub right: String,
}

/// A full exercise definition as stored in a definitions file. The `kind`
/// tag selects the item shape and the controller that hosts it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExerciseSpec {
    LetterChoice {
        items: Vec<LetterItem>,
    },
    AudioMatch {
        items: Vec<AudioMatchItem>,
    },
    RepetitionDrill {
        words: Vec<RepetitionWord>,
        required_repetitions: u32,
    },
    WordIdentity {
        sequences: Vec<WordSequence>,
    },
    WordPairing {
        pairs: Vec<WordPair>,
    },
}
