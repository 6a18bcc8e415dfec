use serde::{Deserialize, Serialize};
use tracing::debug_span;

use super::table::RomajiTable;
use crate::settings::settings;
use crate::unicode::{is_consonant, is_romaji_letter, is_vowel};

/// How a standalone `n` that could still start な/にゃ is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NasalPolicy {
    /// Always hold the `n` back while more input could extend it.
    #[default]
    Buffer,
    /// Hold it back only right after a vowel; elsewhere emit ん at once.
    AfterVowel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomajiConvertResult {
    pub composed_kana: String,
    /// Lower-cased raw input that produced no output yet.
    pub pending_romaji: String,
    /// Number of (lower-cased) input chars represented in `composed_kana`.
    pub consumed_len: usize,
}

/// Convert with the global table and the configured nasal policy.
pub fn convert(raw: &str) -> String {
    convert_romaji(RomajiTable::global(), raw, settings().romaji.nasal_policy).composed_kana
}

/// Convert a whole raw keystroke buffer to kana.
///
/// Scans left to right; at each position the first rule that applies wins:
/// explicit `n'`, doubled consonant (っ), longest table key, standalone `n`,
/// ambiguous prefix (stop), passthrough. Stopping leaves the rest of the
/// input in `pending_romaji`.
pub fn convert_romaji(table: &RomajiTable, raw: &str, nasal: NasalPolicy) -> RomajiConvertResult {
    let _span = debug_span!("convert_romaji", raw_len = raw.len()).entered();

    let chars: Vec<char> = raw.chars().flat_map(char::to_lowercase).collect();
    if table.is_empty() {
        return RomajiConvertResult {
            composed_kana: chars.iter().collect(),
            pending_romaji: String::new(),
            consumed_len: chars.len(),
        };
    }

    let mut composed = String::new();
    let mut i = 0;
    // Trailing run of passthrough romaji letters: (composed byte len, start index).
    let mut passthrough_run: Option<(usize, usize)> = None;
    let mut stopped = false;

    while i < chars.len() {
        let ch = chars[i];
        let next = chars.get(i + 1).copied();

        // Explicit hatsuon: n' or n’
        if ch == 'n' && matches!(next, Some('\'' | '’')) {
            composed.push('ん');
            passthrough_run = None;
            i += 2;
            continue;
        }

        // Sokuon: doubled consonant other than n
        if ch != 'n' && is_consonant(ch) && next == Some(ch) {
            composed.push('っ');
            passthrough_run = None;
            i += 1;
            continue;
        }

        if let Some((len, kana)) = longest_match(table, &chars[i..]) {
            composed.push_str(kana);
            passthrough_run = None;
            i += len;
            continue;
        }

        if ch == 'n' {
            let extendable = match next {
                None => true,
                Some(c) if is_vowel(c) => true,
                Some('y') => chars.get(i + 2).map_or(true, |&c| is_vowel(c)),
                Some(_) => false,
            };
            let gated = match nasal {
                NasalPolicy::Buffer => true,
                NasalPolicy::AfterVowel => i > 0 && is_vowel(chars[i - 1]),
            };
            if extendable && gated {
                stopped = true;
                break;
            }
            composed.push('ん');
            passthrough_run = None;
            i += 1;
            continue;
        }

        let rest_len = chars.len() - i;
        if rest_len < table.max_key_len() {
            let rest: String = chars[i..].iter().collect();
            if table.is_prefix(&rest) {
                stopped = true;
                break;
            }
        }

        if is_romaji_letter(ch) {
            passthrough_run.get_or_insert((composed.len(), i));
        } else {
            passthrough_run = None;
        }
        composed.push(ch);
        i += 1;
    }

    // Letters passed through right before a held tail go back to pending so
    // that re-converting the output cannot turn them into a new prefix.
    if stopped {
        if let Some((len, start)) = passthrough_run {
            composed.truncate(len);
            i = start;
        }
    }

    RomajiConvertResult {
        composed_kana: composed,
        pending_romaji: chars[i..].iter().collect(),
        consumed_len: i,
    }
}

/// Longest table key that is a prefix of `rest`, with its char length.
fn longest_match<'a>(table: &'a RomajiTable, rest: &[char]) -> Option<(usize, &'a str)> {
    let mut key = String::with_capacity(table.max_key_len());
    for &len in table.candidate_lengths() {
        if len > rest.len() {
            continue;
        }
        key.clear();
        key.extend(&rest[..len]);
        if let Some(kana) = table.get(&key) {
            return Some((len, kana));
        }
    }
    None
}
