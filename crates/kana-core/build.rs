use toml::Value;

fn main() {
    // Reject broken embedded data at compile time; at runtime a bad table
    // would silently degrade to passthrough.
    let settings = parse("src/default_settings.toml", include_str!("src/default_settings.toml"));
    check_settings(&settings);

    let romaji = parse(
        "src/romaji/default_romaji.toml",
        include_str!("src/romaji/default_romaji.toml"),
    );
    check_romaji(&romaji);
}

fn parse(path: &str, content: &str) -> Value {
    println!("cargo:rerun-if-changed={path}");
    content
        .parse::<Value>()
        .unwrap_or_else(|e| panic!("{path} contains invalid TOML: {e}"))
}

fn check_settings(v: &Value) {
    if let Some(policy) = v.get("romaji").and_then(|r| r.get("nasal_policy")) {
        match policy.as_str() {
            Some("buffer" | "after_vowel") => {}
            _ => panic!("default_settings.toml: bad romaji.nasal_policy {policy}"),
        }
    }
    if let Some(cap) = v.get("session").and_then(|s| s.get("input_cap_factor")) {
        if !cap.as_integer().is_some_and(|n| n > 0) {
            panic!("default_settings.toml: session.input_cap_factor must be a positive integer");
        }
    }
}

fn check_romaji(v: &Value) {
    let mut count = 0;
    for group in ["digraphs", "syllables"] {
        let Some(entries) = v.get(group) else {
            continue;
        };
        let entries = entries
            .as_table()
            .unwrap_or_else(|| panic!("default_romaji.toml: [{group}] must be a table"));
        for (key, value) in entries {
            if key.is_empty() || !key.chars().all(|c| c.is_ascii_lowercase() || c == '\'') {
                panic!("default_romaji.toml: key {key:?} in [{group}] must be [a-z']");
            }
            let kana = value
                .as_str()
                .unwrap_or_else(|| panic!("default_romaji.toml: {key} must map to a string"));
            if kana.is_empty() || kana.chars().any(|c| c.is_ascii_alphabetic()) {
                panic!("default_romaji.toml: {key} maps to {kana:?}, expected kana");
            }
            count += 1;
        }
    }
    if count == 0 {
        panic!("default_romaji.toml has no mappings");
    }
}
