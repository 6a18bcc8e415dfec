mod proptest_fsm;

use std::sync::Arc;

use kana_core::romaji::{default_toml, NasalPolicy, RomajiTable};

use super::{KeyOutcome, WordSession};

pub(super) fn make_test_table() -> Arc<RomajiTable> {
    Arc::new(RomajiTable::from_toml(default_toml()).unwrap())
}

pub(super) fn make_session(words: &[&str]) -> WordSession {
    WordSession::new(make_test_table(), words.iter().copied())
        .with_nasal_policy(NasalPolicy::Buffer)
        .with_input_cap_factor(4)
}

/// Type each char of `romaji` as its own keystroke, returning every outcome.
pub(super) fn type_string(session: &mut WordSession, romaji: &str) -> Vec<KeyOutcome> {
    romaji
        .chars()
        .map(|ch| session.type_text(&ch.to_string()))
        .collect()
}
