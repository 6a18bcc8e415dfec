//! Property-based tests for whole-buffer conversion.

use std::sync::OnceLock;

use proptest::prelude::*;

use super::table::DEFAULT_TOML;
use super::{convert_romaji, NasalPolicy, RomajiTable};

fn table() -> &'static RomajiTable {
    static TABLE: OnceLock<RomajiTable> = OnceLock::new();
    TABLE.get_or_init(|| RomajiTable::from_toml(DEFAULT_TOML).unwrap())
}

fn arb_input_char() -> impl Strategy<Value = char> {
    // Vowels and n at higher weight for more realistic romaji
    prop_oneof![
        4 => prop::sample::select(vec!['a', 'i', 'u', 'e', 'o']),
        3 => Just('n'),
        4 => prop::sample::select(vec![
            'k', 's', 't', 'h', 'm', 'y', 'r', 'w', 'g', 'z', 'd', 'b', 'p', 'c', 'f', 'j',
            'l', 'v', 'x', 'q',
        ]),
        1 => prop::sample::select(vec!['\'', '’', '-', ' ', '1', 'K', 'N']),
        1 => prop::sample::select(vec!['か', 'っ', 'ん', 'ア', '、']),
    ]
}

fn arb_input() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_input_char(), 0..24).prop_map(|v| v.into_iter().collect())
}

fn arb_policy() -> impl Strategy<Value = NasalPolicy> {
    prop_oneof![Just(NasalPolicy::Buffer), Just(NasalPolicy::AfterVowel)]
}

proptest! {
    #[test]
    fn conversion_is_idempotent(raw in arb_input(), policy in arb_policy()) {
        let once = convert_romaji(table(), &raw, policy);
        let twice = convert_romaji(table(), &once.composed_kana, policy);
        prop_assert_eq!(&twice.composed_kana, &once.composed_kana);
        prop_assert!(twice.pending_romaji.is_empty());
    }

    #[test]
    fn conversion_is_deterministic(raw in arb_input(), policy in arb_policy()) {
        prop_assert_eq!(
            convert_romaji(table(), &raw, policy),
            convert_romaji(table(), &raw, policy)
        );
    }

    #[test]
    fn pending_is_suffix_of_input(raw in arb_input(), policy in arb_policy()) {
        let r = convert_romaji(table(), &raw, policy);
        let lowered: String = raw.chars().flat_map(char::to_lowercase).collect();
        prop_assert!(r.consumed_len <= lowered.chars().count());
        let tail: String = lowered.chars().skip(r.consumed_len).collect();
        prop_assert_eq!(tail, r.pending_romaji);
    }

    #[test]
    fn pending_never_contains_kana(raw in arb_input()) {
        let r = convert_romaji(table(), &raw, NasalPolicy::Buffer);
        prop_assert!(r.pending_romaji.chars().all(|c| c.is_ascii()));
    }
}
