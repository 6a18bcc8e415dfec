use std::sync::Arc;

use tracing::info;

use kana_core::matcher::{match_progress, MatchState};
use kana_core::romaji::{convert_romaji, NasalPolicy, RomajiConvertResult, RomajiTable};
use kana_core::settings::settings;
use kana_session::WordSession;

/// Shared entry point: one immutable romaji table, any number of sessions.
#[derive(Clone)]
pub struct KanaEngine {
    table: Arc<RomajiTable>,
    nasal: NasalPolicy,
}

impl KanaEngine {
    pub fn new(table: Arc<RomajiTable>) -> Self {
        info!(mappings = table.len(), "kana engine created");
        Self {
            table,
            nasal: settings().romaji.nasal_policy,
        }
    }

    /// Engine over the process-wide table (default or `init_custom`).
    pub fn global() -> Self {
        Self::new(Arc::clone(RomajiTable::global()))
    }

    /// Engine over a TOML table; malformed data yields a passthrough engine.
    pub fn from_toml(toml_str: &str) -> Self {
        Self::new(Arc::new(RomajiTable::load_or_empty(toml_str)))
    }

    pub fn with_nasal_policy(mut self, nasal: NasalPolicy) -> Self {
        self.nasal = nasal;
        self
    }

    pub fn table(&self) -> &Arc<RomajiTable> {
        &self.table
    }

    pub fn nasal_policy(&self) -> NasalPolicy {
        self.nasal
    }

    pub fn convert(&self, raw: &str) -> String {
        self.convert_detailed(raw).composed_kana
    }

    pub fn convert_detailed(&self, raw: &str) -> RomajiConvertResult {
        convert_romaji(&self.table, raw, self.nasal)
    }

    pub fn match_progress(&self, typed_kana: &str, target: &str) -> MatchState {
        match_progress(typed_kana, target)
    }

    pub fn create_session<I, S>(&self, words: I) -> WordSession
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WordSession::new(Arc::clone(&self.table), words).with_nasal_policy(self.nasal)
    }
}
