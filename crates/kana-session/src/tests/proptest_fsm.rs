//! Property-based tests for the WordSession state machine.
//!
//! Generates random edit sequences via proptest and verifies that
//! structural invariants hold after every action.

use proptest::prelude::*;

use kana_core::romaji::{convert_romaji, NasalPolicy};
use kana_core::unicode::mora_len;

use super::{make_session, make_test_table};
use crate::types::KeyEvent;

const WORDS: &[&str] = &["がっこう", "こんにちは", "きょう", "ほん"];

fn arb_romaji_char() -> impl Strategy<Value = char> {
    prop_oneof![
        3 => prop::sample::select(vec!['a', 'i', 'u', 'e', 'o']),
        2 => Just('n'),
        2 => prop::sample::select(vec!['k', 'g', 'h', 'c', 'y', 't', 's', 'x', '\'']),
    ]
}

fn arb_event() -> impl Strategy<Value = KeyEvent> {
    prop_oneof![
        10 => arb_romaji_char().prop_map(|c| KeyEvent::Text(c.to_string())),
        3 => Just(KeyEvent::Backspace),
        1 => prop::collection::vec(arb_romaji_char(), 0..40)
            .prop_map(|v| KeyEvent::Replace(v.into_iter().collect())),
    ]
}

proptest! {
    #[test]
    fn session_invariants(events in prop::collection::vec(arb_event(), 0..60)) {
        let table = make_test_table();
        let mut session = make_session(WORDS);
        let mut last_index = 0;

        for event in events {
            let before = session.stats();
            let outcome = session.handle_key(event);
            let stats = session.stats();

            prop_assert!(session.word_index() >= last_index);
            last_index = session.word_index();
            prop_assert_eq!(stats.completed_words, session.word_index());
            prop_assert!(stats.errors <= stats.keystrokes);
            prop_assert!(stats.errors - before.errors <= 1);
            prop_assert_eq!(outcome.regressed, stats.errors > before.errors);

            if outcome.advanced {
                prop_assert!(outcome.state.is_complete);
                prop_assert_eq!(session.raw(), "");
                prop_assert_eq!(outcome.kana.as_str(), WORDS[outcome.word_index]);
            }

            if let Some(target) = session.target() {
                prop_assert!(session.raw().chars().count() <= session.input_cap());
                prop_assert!(session.matched_count() <= mora_len(target));
                let expected = convert_romaji(&table, session.raw(), NasalPolicy::Buffer);
                prop_assert_eq!(session.kana(), expected.composed_kana.as_str());
                prop_assert_eq!(session.pending(), expected.pending_romaji.as_str());
            }
        }
    }
}
