use tracing::{debug, debug_span};

use kana_core::matcher::match_progress;
use kana_core::romaji::convert_romaji;
use kana_core::unicode::mora_len;

use super::types::{KeyEvent, KeyOutcome};
use super::WordSession;

impl WordSession {
    /// Apply one edit and report the recomputed progress.
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyOutcome {
        let _span = debug_span!("handle_key", ?event).entered();

        match event {
            KeyEvent::Text(text) => self.type_text(&text),
            KeyEvent::Backspace => self.backspace(),
            KeyEvent::Replace(raw) => self.set_buffer(&raw),
        }
    }

    pub fn type_text(&mut self, text: &str) -> KeyOutcome {
        self.stats.keystrokes += text.chars().count();
        let mut raw = self.raw.clone();
        raw.push_str(text);
        self.apply(raw)
    }

    pub fn backspace(&mut self) -> KeyOutcome {
        let mut raw = self.raw.clone();
        raw.pop();
        self.apply(raw)
    }

    /// Replace the whole raw buffer (paste, mid-buffer edit). Chars the
    /// replacement adds beyond the old buffer length, up to the input cap,
    /// count as keystrokes.
    pub fn set_buffer(&mut self, raw: &str) -> KeyOutcome {
        let added = mora_len(raw)
            .min(self.input_cap())
            .saturating_sub(mora_len(&self.raw));
        self.stats.keystrokes += added;
        self.apply(raw.to_string())
    }

    fn apply(&mut self, mut raw: String) -> KeyOutcome {
        let Some(target) = self.words.get(self.current) else {
            return KeyOutcome::ignored(self.current);
        };

        let cap = mora_len(target) * self.input_cap_factor;
        if let Some((idx, _)) = raw.char_indices().nth(cap) {
            raw.truncate(idx);
        }

        let result = convert_romaji(&self.table, &raw, self.nasal);
        let state = match_progress(&result.composed_kana, target);

        let input_grew = mora_len(&raw) > mora_len(&self.raw);
        let kana_grew = mora_len(&result.composed_kana) > mora_len(&self.kana);
        let regressed = input_grew && kana_grew && state.matched_count <= self.matched;
        if regressed {
            self.stats.errors += 1;
            debug!(raw = %raw, kana = %result.composed_kana, "typing error");
        }

        let mut outcome = KeyOutcome {
            word_index: self.current,
            kana: result.composed_kana.clone(),
            pending: result.pending_romaji.clone(),
            state,
            regressed,
            advanced: false,
        };

        if state.is_complete {
            self.stats.completed_words += 1;
            self.stats.completed_moras += mora_len(target);
            self.current += 1;
            self.reset_word();
            outcome.advanced = true;
            debug!(word_index = outcome.word_index, "word complete");
        } else {
            self.raw = raw;
            self.kana = result.composed_kana;
            self.pending = result.pending_romaji;
            self.matched = state.matched_count;
        }

        outcome
    }
}
