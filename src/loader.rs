use crate::error::{DfResult, DrillForgeError};
use crate::items::ExerciseSpec;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Loads a definitions file: a JSON array of exercise definitions, each
/// tagged with a `kind` field.
pub fn load_definitions<P: AsRef<Path>>(path: P) -> DfResult<Vec<ExerciseSpec>> {
    let content = fs::read_to_string(&path)?;
    let specs: Vec<ExerciseSpec> = serde_json::from_str(&content)?;
    info!(
        "Loaded {} exercise definitions from {}",
        specs.len(),
        path.as_ref().display()
    );
    Ok(specs)
}

/// Audits one definition for the structural rules the controllers rely
/// on. Controllers assume audited input and never re-check these.
pub fn audit(spec: &ExerciseSpec) -> DfResult<()> {
    match spec {
        ExerciseSpec::LetterChoice { items } => {
            if items.is_empty() {
                return fail("letter_choice: no items");
            }
            let mut ids = BTreeSet::new();
            for item in items {
                if !ids.insert(item.id) {
                    return fail(format!("letter_choice: duplicate item id {}", item.id));
                }
                let chars: Vec<char> = item.text.chars().collect();
                let Some(&masked) = chars.get(item.masked_position) else {
                    return fail(format!(
                        "letter_choice: masked position {} outside word '{}'",
                        item.masked_position, item.text
                    ));
                };
                if !masked
                    .to_lowercase()
                    .eq(item.correct_letter.to_lowercase())
                {
                    return fail(format!(
                        "letter_choice: word '{}' has '{}' at position {}, correct letter is '{}'",
                        item.text, masked, item.masked_position, item.correct_letter
                    ));
                }
                if item.letter_pool().len() < 2 {
                    return fail(format!(
                        "letter_choice: item {} offers no decoy distinct from the correct letter",
                        item.id
                    ));
                }
            }
        }
        ExerciseSpec::AudioMatch { items } => {
            if items.is_empty() {
                return fail("audio_match: no items");
            }
            let mut ids = BTreeSet::new();
            for item in items {
                if !ids.insert(item.id) {
                    return fail(format!("audio_match: duplicate item id {}", item.id));
                }
            }
            if !items.iter().any(|item| item.is_correct) {
                return fail("audio_match: target set is empty (no item marked correct)");
            }
        }
        ExerciseSpec::RepetitionDrill {
            words,
            required_repetitions,
        } => {
            if words.is_empty() {
                return fail("repetition_drill: no words");
            }
            if *required_repetitions < 1 {
                return fail("repetition_drill: required_repetitions must be >= 1");
            }
            let mut ids = BTreeSet::new();
            for word in words {
                if !ids.insert(word.id) {
                    return fail(format!("repetition_drill: duplicate word id {}", word.id));
                }
            }
        }
        ExerciseSpec::WordIdentity { sequences } => {
            if sequences.is_empty() {
                return fail("word_identity: no sequences");
            }
            for (i, seq) in sequences.iter().enumerate() {
                if seq.others.is_empty() {
                    return fail(format!(
                        "word_identity: sequence {} ('{}') has no candidates",
                        i, seq.model
                    ));
                }
            }
        }
        ExerciseSpec::WordPairing { pairs } => {
            if pairs.is_empty() {
                return fail("word_pairing: no pairs");
            }
            // Scoring looks up right texts by value, so they must be unique.
            let mut lefts = BTreeSet::new();
            let mut rights = BTreeSet::new();
            for pair in pairs {
                if !lefts.insert(pair.left.as_str()) {
                    return fail(format!("word_pairing: duplicate left text '{}'", pair.left));
                }
                if !rights.insert(pair.right.as_str()) {
                    return fail(format!(
                        "word_pairing: duplicate right text '{}'",
                        pair.right
                    ));
                }
            }
        }
    }
    debug!("definition audit passed: {}", spec.kind());
    Ok(())
}

/// Audits every definition in a file's worth of specs, reporting the
/// first failure with its index.
pub fn audit_all(specs: &[ExerciseSpec]) -> DfResult<()> {
    for (i, spec) in specs.iter().enumerate() {
        audit(spec).map_err(|e| match e {
            DrillForgeError::Validation(msg) => {
                DrillForgeError::Validation(format!("exercise {}: {}", i, msg))
            }
            other => other,
        })?;
    }
    Ok(())
}

fn fail<T, S: Into<String>>(msg: S) -> DfResult<T> {
    Err(DrillForgeError::Validation(msg.into()))
}
