//! Romaji-to-kana typing engine.
//!
//! Re-exports the conversion core and the practice session, and provides
//! [`KanaEngine`], which shares one romaji table across sessions.

mod engine;
mod trace_init;

pub use engine::KanaEngine;
pub use trace_init::{init_tracing, TraceGuard};

pub use kana_core::matcher::{match_progress, MatchState, WordPhase};
pub use kana_core::romaji::{
    convert, convert_romaji, NasalPolicy, RomajiConfigError, RomajiConvertResult, RomajiTable,
};
pub use kana_core::{matcher, romaji, settings, unicode};
pub use kana_session::{KeyEvent, KeyOutcome, SessionStats, WordSession};
