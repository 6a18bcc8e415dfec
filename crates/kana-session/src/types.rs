use serde::Serialize;

use kana_core::matcher::{MatchState, WordPhase};

/// An edit to the raw keystroke buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    /// Typed characters appended at the end of the buffer.
    Text(String),
    Backspace,
    /// Whole-buffer replacement (paste, cursor edit, IME reset).
    Replace(String),
}

impl KeyEvent {
    pub fn text(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Result of applying one edit, recomputed from the whole buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyOutcome {
    /// Index of the word this edit was applied to.
    pub word_index: usize,
    pub kana: String,
    pub pending: String,
    pub state: MatchState,
    /// Input and kana grew but the matched prefix did not.
    pub regressed: bool,
    /// The word was completed and the session moved on.
    pub advanced: bool,
}

impl KeyOutcome {
    pub(crate) fn ignored(word_index: usize) -> Self {
        Self {
            word_index,
            kana: String::new(),
            pending: String::new(),
            state: MatchState {
                matched_count: 0,
                is_complete: false,
            },
            regressed: false,
            advanced: false,
        }
    }

    pub fn phase(&self) -> WordPhase {
        self.state.phase()
    }
}

/// Raw counters for the caller's scoring (WPM, accuracy).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub keystrokes: usize,
    pub errors: usize,
    pub completed_words: usize,
    /// Sum of target lengths (morae) of completed words.
    pub completed_moras: usize,
}
