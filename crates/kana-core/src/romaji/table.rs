use std::collections::{HashMap, HashSet};
use std::sync::{Arc, OnceLock};

use tracing::warn;

use super::config::{parse_romaji_toml, validate_pair, RomajiConfigError};

pub const DEFAULT_TOML: &str = include_str!("default_romaji.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Returns the embedded default romaji TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

/// Immutable lookup structures derived from a romaji mapping table.
///
/// Built once and shared read-only; every conversion borrows it.
#[derive(Debug, Clone, Default)]
pub struct RomajiTable {
    exact: HashMap<String, String>,
    /// Longest first, ties in table order.
    keys_by_length: Vec<String>,
    /// Every strict prefix of every key.
    prefixes: HashSet<String>,
    /// Distinct key lengths (in chars), longest first.
    lengths: Vec<usize>,
}

impl RomajiTable {
    /// Build the index from `(romaji, kana)` pairs.
    ///
    /// Keys are lower-cased. A repeated key keeps its last value.
    pub fn build<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Result<Self, RomajiConfigError>
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut exact: HashMap<String, String> = HashMap::new();
        let mut order: Vec<String> = Vec::new();

        for (key, value) in pairs {
            let key = key.as_ref().to_lowercase();
            let value = value.into();
            validate_pair(&key, &value)?;
            match exact.insert(key.clone(), value) {
                Some(_) => warn!(key = %key, "duplicate romaji key, last mapping wins"),
                None => order.push(key),
            }
        }

        let mut prefixes = HashSet::new();
        for key in &order {
            for (idx, _) in key.char_indices().skip(1) {
                prefixes.insert(key[..idx].to_string());
            }
        }

        // Stable sort keeps table order among equal lengths.
        let mut keys_by_length = order;
        keys_by_length.sort_by_key(|k| std::cmp::Reverse(k.chars().count()));

        let mut lengths: Vec<usize> = keys_by_length.iter().map(|k| k.chars().count()).collect();
        lengths.dedup();

        Ok(Self {
            exact,
            keys_by_length,
            prefixes,
            lengths,
        })
    }

    /// A table with no mappings; conversion through it is pure passthrough.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, RomajiConfigError> {
        Self::build(parse_romaji_toml(toml_str)?)
    }

    /// Build from TOML, degrading to the empty table on malformed data.
    pub fn load_or_empty(toml_str: &str) -> Self {
        match Self::from_toml(toml_str) {
            Ok(table) => table,
            Err(e) => {
                warn!(error = %e, "invalid romaji table, falling back to passthrough");
                Self::empty()
            }
        }
    }

    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), RomajiConfigError> {
        // Validate eagerly
        Self::from_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RomajiConfigError::AlreadyInitialized)
    }

    /// Get or initialize the process-wide table.
    pub fn global() -> &'static Arc<RomajiTable> {
        static INSTANCE: OnceLock<Arc<RomajiTable>> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            Arc::new(Self::load_or_empty(toml_str))
        })
    }

    pub fn get(&self, romaji: &str) -> Option<&str> {
        self.exact.get(romaji).map(String::as_str)
    }

    /// True if `romaji` is a strict prefix of some key.
    pub fn is_prefix(&self, romaji: &str) -> bool {
        self.prefixes.contains(romaji)
    }

    /// True if every char of `reading` appears in some mapping value, i.e. the
    /// reading can be produced by typing romaji. ー has no key in the default
    /// table, so "らーめん" is not typeable there.
    pub fn can_produce(&self, reading: &str) -> bool {
        reading
            .chars()
            .all(|c| self.exact.values().any(|kana| kana.contains(c)))
    }

    pub fn keys_by_descending_length(&self) -> &[String] {
        &self.keys_by_length
    }

    /// Key lengths worth trying at a position, longest first.
    pub fn candidate_lengths(&self) -> &[usize] {
        &self.lengths
    }

    pub fn max_key_len(&self) -> usize {
        self.lengths.first().copied().unwrap_or(0)
    }

    /// Mappings in greedy-match order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.keys_by_length
            .iter()
            .map(|k| (k.as_str(), self.exact[k].as_str()))
    }

    pub fn len(&self) -> usize {
        self.exact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }
}
