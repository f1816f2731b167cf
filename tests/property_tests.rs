use drillforge::events::RecordingSink;
use drillforge::exercise::{LetterChoice, Phase, RepetitionDrill, WordIdentity, WordPairing};
use drillforge::items::{OtherWord, WordPair, WordSequence};
use proptest::prelude::*;

mod common;
use common::{letter_item, three_letter_items, two_repetition_words};

// --- STRATEGIES ---

#[derive(Debug, Clone, Copy)]
enum PairingOp {
    Arm(usize),
    Connect(usize),
}

fn arb_pairing_ops(n: usize) -> impl Strategy<Value = Vec<PairingOp>> {
    prop::collection::vec(
        prop_oneof![
            (0..n).prop_map(PairingOp::Arm),
            (0..n).prop_map(PairingOp::Connect),
        ],
        0..40,
    )
}

fn arb_pairs(n: usize) -> Vec<WordPair> {
    (0..n)
        .map(|i| WordPair {
            left: format!("left{}", i),
            right: format!("right{}", i),
        })
        .collect()
}

proptest! {
    // At most one connection per left index and per right index survives
    // any sequence of arm/connect operations.
    #[test]
    fn prop_pairing_connection_invariant(
        ops in arb_pairing_ops(5),
        seed in 0u64..1000,
    ) {
        let mut c = WordPairing::new(arb_pairs(5), Some(seed));
        for op in ops {
            match op {
                PairingOp::Arm(i) => c.arm_left(i),
                PairingOp::Connect(i) => c.connect_to_right(i),
            }
        }
        let conns = c.connections();
        for a in 0..conns.len() {
            for b in (a + 1)..conns.len() {
                prop_assert_ne!(conns[a].left, conns[b].left);
                prop_assert_ne!(conns[a].right, conns[b].right);
            }
        }
    }

    // Pairing score never exceeds the number of connections made, and the
    // total is always the pair count.
    #[test]
    fn prop_pairing_score_bounds(
        ops in arb_pairing_ops(4),
        seed in 0u64..1000,
    ) {
        let mut c = WordPairing::new(arb_pairs(4), Some(seed));
        for op in ops {
            match op {
                PairingOp::Arm(i) => c.arm_left(i),
                PairingOp::Connect(i) => c.connect_to_right(i),
            }
        }
        let made = c.connections().len() as u32;
        let mut sink = RecordingSink::new();
        c.validate(&mut sink);
        let score = c.score().unwrap();
        prop_assert!(score.correct <= made);
        prop_assert_eq!(score.total, 4);
    }

    // Word-identity scoring: correct = candidates whose selection matches
    // their validity flag; total = candidate count.
    #[test]
    fn prop_word_identity_accounting(
        flags in prop::collection::vec(any::<bool>(), 1..8),
        toggles in prop::collection::vec(0usize..8, 0..20),
    ) {
        let seqs = vec![WordSequence {
            model: "model".into(),
            others: flags
                .iter()
                .map(|&v| OtherWord { word: "w".into(), is_valid: v })
                .collect(),
        }];
        let mut c = WordIdentity::new(seqs);
        for ci in toggles {
            c.toggle_candidate(0, ci % flags.len());
        }
        let expected = flags
            .iter()
            .enumerate()
            .filter(|&(ci, &v)| v == c.is_selected(0, ci))
            .count() as u32;

        let mut sink = RecordingSink::new();
        c.validate(&mut sink);
        let score = c.score().unwrap();
        prop_assert_eq!(score.correct, expected);
        prop_assert_eq!(score.total, flags.len() as u32);
    }

    // Letter-choice only transitions when every item has a choice, and a
    // transition always reports total = N.
    #[test]
    fn prop_letter_choice_gating(
        picks in prop::collection::vec((1u32..=3, any::<char>()), 0..6),
    ) {
        let mut c = LetterChoice::new(three_letter_items(), Some(0));
        for (id, letter) in picks {
            c.select_letter(id, letter);
        }
        let complete = (1..=3).all(|id| c.choice(id).is_some());
        let mut sink = RecordingSink::new();
        c.validate(&mut sink);
        if complete {
            prop_assert_eq!(c.phase(), Phase::Validated);
            prop_assert_eq!(c.score().unwrap().total, 3);
            prop_assert_eq!(sink.scores().len(), 1);
        } else {
            prop_assert_eq!(c.phase(), Phase::Selecting);
            prop_assert!(sink.events.is_empty());
        }
    }

    // Play counters never exceed the required repetition count.
    #[test]
    fn prop_repetition_counter_cap(
        plays in prop::collection::vec(any::<bool>(), 0..30),
        required in 1u32..5,
    ) {
        let mut c = RepetitionDrill::new(two_repetition_words(), required);
        let mut sink = RecordingSink::new();
        for forward in plays {
            if forward {
                c.next(&mut sink);
            } else {
                c.play_current(&drillforge::audio::NullAudio);
            }
        }
        for i in 0..2 {
            prop_assert!(c.play_count(i) <= required);
        }
    }

    // The offered letter pool is always a permutation of the dedup'd
    // correct-plus-decoys set, whatever the seed.
    #[test]
    fn prop_letter_pool_permutation(seed in 0u64..10_000) {
        let items = vec![letter_item(1, "chien", 4, 'n', &['m', 'n', 'u'])];
        let c = LetterChoice::new(items, Some(seed));
        let mut offered = c.offered_letters().to_vec();
        offered.sort_unstable();
        prop_assert_eq!(offered, vec!['m', 'n', 'u']);
    }
}
