#![allow(dead_code)] // Shared helpers; not every test file uses all of them.

use drillforge::items::{
    AudioMatchItem, LetterItem, OtherWord, RepetitionWord, WordPair, WordSequence,
};

pub fn letter_item(id: u32, text: &str, pos: usize, correct: char, decoys: &[char]) -> LetterItem {
    LetterItem {
        id,
        image: format!("img/{}.png", text),
        text: text.to_string(),
        masked_position: pos,
        correct_letter: correct,
        decoy_letters: decoys.to_vec(),
    }
}

/// Three masked words with correct letters a, b, c.
pub fn three_letter_items() -> Vec<LetterItem> {
    vec![
        letter_item(1, "chat", 2, 'a', &['o', 'u']),
        letter_item(2, "robe", 2, 'b', &['p', 'd']),
        letter_item(3, "coq", 0, 'c', &['k', 'q']),
    ]
}

pub fn audio_item(id: u32, is_correct: bool) -> AudioMatchItem {
    AudioMatchItem {
        id,
        image: format!("img/{}.png", id),
        audio: format!("audio/{}.mp3", id),
        is_correct,
    }
}

/// Target set {1, 3} out of ids 1..=3.
pub fn three_audio_items() -> Vec<AudioMatchItem> {
    vec![
        audio_item(1, true),
        audio_item(2, false),
        audio_item(3, true),
    ]
}

pub fn repetition_word(id: u32, text: &str) -> RepetitionWord {
    RepetitionWord {
        id,
        text: text.to_string(),
        audio: format!("audio/{}.mp3", text),
    }
}

pub fn two_repetition_words() -> Vec<RepetitionWord> {
    vec![repetition_word(1, "lundi"), repetition_word(2, "mardi")]
}

pub fn sequence(model: &str, others: &[(&str, bool)]) -> WordSequence {
    WordSequence {
        model: model.to_string(),
        others: others
            .iter()
            .map(|(w, v)| OtherWord {
                word: w.to_string(),
                is_valid: *v,
            })
            .collect(),
    }
}

pub fn pair(left: &str, right: &str) -> WordPair {
    WordPair {
        left: left.to_string(),
        right: right.to_string(),
    }
}

pub fn two_pairs() -> Vec<WordPair> {
    vec![pair("cat", "chat"), pair("dog", "chien")]
}
