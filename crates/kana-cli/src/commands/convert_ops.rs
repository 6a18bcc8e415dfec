use serde::Serialize;

use kana_engine::unicode::hiragana_to_katakana;
use kana_engine::{KanaEngine, KeyOutcome, MatchState, NasalPolicy, SessionStats, WordPhase};

use super::pad;

#[derive(Debug, Serialize)]
struct ConvertRow<'a> {
    raw: &'a str,
    kana: String,
    pending: String,
    consumed_len: usize,
}

fn display(kana: String, katakana: bool) -> String {
    if katakana {
        hiragana_to_katakana(&kana)
    } else {
        kana
    }
}

/// One output line per raw buffer.
pub fn convert_lines(
    engine: &KanaEngine,
    inputs: &[String],
    json: bool,
    katakana: bool,
) -> Vec<String> {
    inputs
        .iter()
        .map(|raw| {
            let r = engine.convert_detailed(raw);
            let kana = display(r.composed_kana, katakana);
            if json {
                let row = ConvertRow {
                    raw,
                    kana,
                    pending: r.pending_romaji,
                    consumed_len: r.consumed_len,
                };
                serde_json::to_string(&row).unwrap_or_default()
            } else if r.pending_romaji.is_empty() {
                format!("{raw}\t{kana}")
            } else {
                format!("{raw}\t{kana}\t(pending: {})", r.pending_romaji)
            }
        })
        .collect()
}

pub fn convert_cmd(inputs: &[String], nasal: NasalPolicy, json: bool, katakana: bool) {
    let engine = KanaEngine::global().with_nasal_policy(nasal);
    for line in convert_lines(&engine, inputs, json, katakana) {
        println!("{line}");
    }
}

pub fn match_line(state: &MatchState, target: &str) -> String {
    let total = target.chars().count();
    let done: String = target.chars().take(state.matched_count).collect();
    format!(
        "matched {}/{} [{}] complete={}",
        state.matched_count, total, done, state.is_complete
    )
}

pub fn match_cmd(typed: &str, target: &str, json: bool) {
    let state = KanaEngine::global().match_progress(typed, target);
    if json {
        println!("{}", serde_json::to_string(&state).unwrap_or_default());
    } else {
        println!("{}", match_line(&state, target));
    }
}

fn phase_name(phase: WordPhase) -> &'static str {
    match phase {
        WordPhase::Empty => "empty",
        WordPhase::Matching => "matching",
        WordPhase::Complete => "complete",
    }
}

/// Feed `keys` one keystroke at a time against `target`; returns the printed
/// lines (header first unless `json`) and the final session stats.
pub fn replay_lines(
    engine: &KanaEngine,
    target: &str,
    keys: &str,
    json: bool,
    katakana: bool,
) -> (Vec<String>, SessionStats) {
    let mut session = engine.create_session([target]);
    let outcomes: Vec<(char, KeyOutcome)> = keys
        .chars()
        .map(|ch| {
            let mut o = session.type_text(&ch.to_string());
            o.kana = display(o.kana, katakana);
            (ch, o)
        })
        .collect();

    let lines = if json {
        outcomes
            .iter()
            .map(|(_, o)| serde_json::to_string(o).unwrap_or_default())
            .collect()
    } else {
        let width = outcomes
            .iter()
            .map(|(_, o)| unicode_width::UnicodeWidthStr::width(o.kana.as_str()))
            .max()
            .unwrap_or(0)
            .max(4);
        let mut lines = vec![format!("key  {}  pending  matched  phase", pad("kana", width))];
        lines.extend(outcomes.iter().map(|(ch, o)| {
            format!(
                "{}  {}  {}  {:>7}  {}{}",
                pad(&ch.to_string(), 3),
                pad(&o.kana, width),
                pad(&o.pending, 7),
                o.state.matched_count,
                phase_name(o.phase()),
                if o.regressed { "  (error)" } else { "" }
            )
        }));
        lines
    };
    (lines, session.stats())
}

pub fn replay_cmd(target: &str, keys: &str, nasal: NasalPolicy, json: bool, katakana: bool) {
    let engine = KanaEngine::global().with_nasal_policy(nasal);
    let (lines, stats) = replay_lines(&engine, target, keys, json, katakana);
    for line in lines {
        println!("{line}");
    }
    eprintln!(
        "keystrokes={} errors={} completed={}",
        stats.keystrokes, stats.errors, stats.completed_words
    );
}
