//! Practice-word session built on the transliterator and progress matcher.
//!
//! `WordSession` owns the raw keystroke buffer for the current target word,
//! re-converts the whole buffer on every edit, and advances to the next word
//! once the converted kana equals the target.

pub(crate) mod types;

mod editing;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use kana_core::matcher::WordPhase;
use kana_core::romaji::{NasalPolicy, RomajiTable};
use kana_core::settings::settings;
use kana_core::unicode::{is_hiragana_reading, mora_len};

pub use types::{KeyEvent, KeyOutcome, SessionStats};

pub struct WordSession {
    table: Arc<RomajiTable>,
    nasal: NasalPolicy,
    input_cap_factor: usize,

    words: Vec<String>,
    current: usize,

    // Per-word state, reset on completion
    raw: String,
    kana: String,
    pending: String,
    matched: usize,

    stats: SessionStats,
}

impl WordSession {
    /// Create a session over `words` (target readings). Empty readings are
    /// dropped since they can never be completed.
    pub fn new<I, S>(table: Arc<RomajiTable>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|w: &String| !w.is_empty())
            .collect();
        for word in &words {
            if !is_hiragana_reading(word) {
                // Still playable, but keys can only match it through passthrough.
                tracing::debug!(word = %word, "target is not a hiragana reading");
            } else if !table.can_produce(word) {
                // e.g. ー: no romaji key yields it, so the word never completes.
                tracing::warn!(word = %word, "target has kana the table cannot produce");
            }
        }
        let s = settings();
        Self {
            table,
            nasal: s.romaji.nasal_policy,
            input_cap_factor: s.session.input_cap_factor,
            words,
            current: 0,
            raw: String::new(),
            kana: String::new(),
            pending: String::new(),
            matched: 0,
            stats: SessionStats::default(),
        }
    }

    pub fn with_nasal_policy(mut self, nasal: NasalPolicy) -> Self {
        self.nasal = nasal;
        self
    }

    pub fn with_input_cap_factor(mut self, factor: usize) -> Self {
        self.input_cap_factor = factor.max(1);
        self
    }

    /// Current target reading, or `None` once every word is done.
    pub fn target(&self) -> Option<&str> {
        self.words.get(self.current).map(String::as_str)
    }

    pub fn word_index(&self) -> usize {
        self.current
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.words.len()
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn kana(&self) -> &str {
        &self.kana
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn matched_count(&self) -> usize {
        self.matched
    }

    pub fn phase(&self) -> WordPhase {
        if self.matched > 0 {
            WordPhase::Matching
        } else {
            WordPhase::Empty
        }
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Maximum raw buffer length (chars) for the current word.
    pub fn input_cap(&self) -> usize {
        self.target()
            .map_or(0, |t| mora_len(t) * self.input_cap_factor)
    }

    fn reset_word(&mut self) {
        self.raw.clear();
        self.kana.clear();
        self.pending.clear();
        self.matched = 0;
    }
}
