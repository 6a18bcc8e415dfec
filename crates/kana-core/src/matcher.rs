//! Progress matching of converted kana against a target reading.

use serde::Serialize;

/// How much of a target reading has been typed correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchState {
    /// Length of the common leading run, in Unicode scalar values.
    pub matched_count: usize,
    pub is_complete: bool,
}

/// Per-word progress as seen by the practice session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WordPhase {
    Empty,
    Matching,
    Complete,
}

impl MatchState {
    pub fn phase(&self) -> WordPhase {
        if self.is_complete {
            WordPhase::Complete
        } else if self.matched_count > 0 {
            WordPhase::Matching
        } else {
            WordPhase::Empty
        }
    }
}

/// Compare typed kana with `target`. An empty target never completes.
pub fn match_progress(typed_kana: &str, target: &str) -> MatchState {
    let matched_count = typed_kana
        .chars()
        .zip(target.chars())
        .take_while(|(typed, expected)| typed == expected)
        .count();
    MatchState {
        matched_count,
        is_complete: !target.is_empty() && typed_kana == target,
    }
}
