use drillforge::items::ExerciseSpec;
use drillforge::loader;
use drillforge::router::ExerciseKind;
use tempfile::tempdir;

mod common;
use common::{audio_item, letter_item, pair, sequence, two_repetition_words};

const GOOD_DEFS: &str = r#"[
  {
    "kind": "letter_choice",
    "items": [
      {
        "id": 1,
        "image": "img/chat.png",
        "text": "chat",
        "masked_position": 2,
        "correct_letter": "a",
        "decoy_letters": ["o", "u"]
      }
    ]
  },
  {
    "kind": "audio_match",
    "items": [
      { "id": 1, "image": "img/1.png", "audio": "audio/1.mp3", "is_correct": true },
      { "id": 2, "image": "img/2.png", "audio": "audio/2.mp3", "is_correct": false }
    ]
  },
  {
    "kind": "repetition_drill",
    "required_repetitions": 3,
    "words": [
      { "id": 1, "text": "lundi", "audio": "audio/lundi.mp3" }
    ]
  },
  {
    "kind": "word_identity",
    "sequences": [
      {
        "model": "chat",
        "others": [
          { "word": "chat", "is_valid": true },
          { "word": "chot", "is_valid": false }
        ]
      }
    ]
  },
  {
    "kind": "word_pairing",
    "pairs": [
      { "left": "cat", "right": "chat" },
      { "left": "dog", "right": "chien" }
    ]
  }
]"#;

#[test]
fn test_load_and_audit_full_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("exercises.json");
    std::fs::write(&path, GOOD_DEFS).unwrap();

    let specs = loader::load_definitions(&path).unwrap();
    assert_eq!(specs.len(), 5);
    assert_eq!(specs[0].kind(), ExerciseKind::LetterChoice);
    assert_eq!(specs[4].kind(), ExerciseKind::WordPairing);
    loader::audit_all(&specs).unwrap();
}

#[test]
fn test_load_missing_file() {
    assert!(loader::load_definitions("no/such/file.json").is_err());
}

#[test]
fn test_load_malformed_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(loader::load_definitions(&path).is_err());
}

#[test]
fn test_unknown_kind_rejected_at_parse() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad_kind.json");
    std::fs::write(&path, r#"[{ "kind": "crossword", "items": [] }]"#).unwrap();
    assert!(loader::load_definitions(&path).is_err());
}

#[test]
fn test_audit_rejects_masked_position_out_of_range() {
    let spec = ExerciseSpec::LetterChoice {
        items: vec![letter_item(1, "chat", 9, 'a', &['o'])],
    };
    assert!(loader::audit(&spec).is_err());
}

#[test]
fn test_audit_rejects_mismatched_correct_letter() {
    let spec = ExerciseSpec::LetterChoice {
        items: vec![letter_item(1, "chat", 2, 'z', &['o'])],
    };
    assert!(loader::audit(&spec).is_err());
}

#[test]
fn test_audit_accepts_case_differing_correct_letter() {
    let spec = ExerciseSpec::LetterChoice {
        items: vec![letter_item(1, "Chat", 0, 'c', &['k'])],
    };
    loader::audit(&spec).unwrap();
}

#[test]
fn test_audit_rejects_letter_item_without_decoys() {
    let spec = ExerciseSpec::LetterChoice {
        items: vec![letter_item(1, "chat", 2, 'a', &['a'])],
    };
    assert!(loader::audit(&spec).is_err());
}

#[test]
fn test_audit_rejects_empty_target_set() {
    let spec = ExerciseSpec::AudioMatch {
        items: vec![audio_item(1, false), audio_item(2, false)],
    };
    assert!(loader::audit(&spec).is_err());
}

#[test]
fn test_audit_rejects_duplicate_ids() {
    let spec = ExerciseSpec::AudioMatch {
        items: vec![audio_item(1, true), audio_item(1, false)],
    };
    assert!(loader::audit(&spec).is_err());
}

#[test]
fn test_audit_rejects_zero_repetitions() {
    let spec = ExerciseSpec::RepetitionDrill {
        words: two_repetition_words(),
        required_repetitions: 0,
    };
    assert!(loader::audit(&spec).is_err());
}

#[test]
fn test_audit_rejects_sequence_without_candidates() {
    let spec = ExerciseSpec::WordIdentity {
        sequences: vec![sequence("chat", &[])],
    };
    assert!(loader::audit(&spec).is_err());
}

#[test]
fn test_audit_rejects_duplicate_right_text() {
    let spec = ExerciseSpec::WordPairing {
        pairs: vec![pair("cat", "chat"), pair("kitten", "chat")],
    };
    assert!(loader::audit(&spec).is_err());
}

#[test]
fn test_audit_rejects_empty_pair_list() {
    let spec = ExerciseSpec::WordPairing { pairs: vec![] };
    assert!(loader::audit(&spec).is_err());
}

#[test]
fn test_audit_all_reports_failing_index() {
    let specs = vec![
        ExerciseSpec::WordPairing {
            pairs: vec![pair("cat", "chat")],
        },
        ExerciseSpec::WordPairing { pairs: vec![] },
    ];
    let err = loader::audit_all(&specs).unwrap_err().to_string();
    assert!(err.contains("exercise 1"), "unexpected error: {}", err);
}
