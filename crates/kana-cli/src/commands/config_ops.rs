use std::fs;
use std::sync::Arc;

use kana_engine::settings::{parse_settings_toml, Settings};
use kana_engine::RomajiTable;

use super::{die, pad};

pub fn romaji_export() {
    print!("{}", kana_engine::romaji::default_toml());
}

pub fn romaji_summary(table: &RomajiTable) -> String {
    format!(
        "OK: {} mappings, longest key {} chars",
        table.len(),
        table.max_key_len()
    )
}

pub fn romaji_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let table = die!(RomajiTable::from_toml(&content), "Error: {}");
    println!("{}", romaji_summary(&table));
}

/// The table in greedy-match order (longest keys first), one mapping per line.
pub fn dump_lines(table: &RomajiTable) -> Vec<String> {
    table
        .iter()
        .map(|(romaji, kana)| format!("{}{kana}", pad(romaji, 6)))
        .collect()
}

pub fn romaji_dump(file: Option<&str>) {
    let table = match file {
        Some(path) => {
            let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
            Arc::new(die!(RomajiTable::from_toml(&content), "Error: {}"))
        }
        None => Arc::clone(RomajiTable::global()),
    };
    for line in dump_lines(&table) {
        println!("{line}");
    }
}

pub fn settings_export() {
    print!("{}", kana_engine::settings::default_toml());
}

pub fn settings_summary(s: &Settings) -> String {
    format!(
        "OK: romaji.nasal_policy={:?}, session.input_cap_factor={}",
        s.romaji.nasal_policy, s.session.input_cap_factor
    )
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(parse_settings_toml(&content), "Error: {}");
    println!("{}", settings_summary(&s));
}
