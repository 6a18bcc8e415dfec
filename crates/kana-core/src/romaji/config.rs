use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
struct RomajiConfig {
    #[serde(default)]
    digraphs: BTreeMap<String, String>,
    #[serde(default)]
    syllables: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RomajiConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("empty romaji key")]
    EmptyKey,
    #[error("invalid romaji key (expected [a-z']): {0}")]
    InvalidKey(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("value for key {0} contains latin letters")]
    LatinValue(String),
    #[error("romaji table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into an ordered list of `(romaji, kana)` pairs.
///
/// Digraphs come first, then syllables; each group is in key order. Keys are
/// lower-cased but not otherwise validated here, see [`validate_pair`].
pub fn parse_romaji_toml(toml_str: &str) -> Result<Vec<(String, String)>, RomajiConfigError> {
    let config: RomajiConfig =
        toml::from_str(toml_str).map_err(|e| RomajiConfigError::Parse(e.to_string()))?;

    let pairs: Vec<(String, String)> = config
        .digraphs
        .into_iter()
        .chain(config.syllables)
        .map(|(key, value)| (key.to_lowercase(), value))
        .collect();

    for (key, value) in &pairs {
        validate_pair(key, value)?;
    }

    Ok(pairs)
}

/// Check a single mapping. Keys must be non-empty `[a-z']`; values must be
/// non-empty and free of ASCII letters so converted output never re-matches.
pub fn validate_pair(key: &str, value: &str) -> Result<(), RomajiConfigError> {
    if key.is_empty() {
        return Err(RomajiConfigError::EmptyKey);
    }
    if !key.chars().all(crate::unicode::is_romaji_letter) {
        return Err(RomajiConfigError::InvalidKey(key.to_string()));
    }
    if value.is_empty() {
        return Err(RomajiConfigError::EmptyValue(key.to_string()));
    }
    if value.chars().any(crate::unicode::is_latin) {
        return Err(RomajiConfigError::LatinValue(key.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[digraphs]
kya = "きゃ"

[syllables]
a = "あ"
ka = "か"
"#;
        let pairs = parse_romaji_toml(toml).unwrap();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], ("kya".to_string(), "きゃ".to_string()));
        assert_eq!(pairs[1], ("a".to_string(), "あ".to_string()));
        assert_eq!(pairs[2], ("ka".to_string(), "か".to_string()));
    }

    #[test]
    fn parse_default_toml() {
        let pairs = parse_romaji_toml(super::super::table::DEFAULT_TOML).unwrap();
        assert!(pairs.len() > 200, "expected 200+ mappings, got {}", pairs.len());
        assert!(pairs.iter().all(|(k, _)| k != "n" && k != "nn"));
    }

    #[test]
    fn missing_groups_are_empty() {
        let pairs = parse_romaji_toml("[syllables]\na = \"あ\"\n").unwrap();
        assert_eq!(pairs.len(), 1);
        assert!(parse_romaji_toml("").unwrap().is_empty());
    }

    #[test]
    fn keys_are_lowercased() {
        let pairs = parse_romaji_toml("[syllables]\nKA = \"か\"\n").unwrap();
        assert_eq!(pairs[0].0, "ka");
    }

    #[test]
    fn apostrophe_key_is_valid() {
        let pairs = parse_romaji_toml("[syllables]\n\"n'\" = \"ん\"\n").unwrap();
        assert_eq!(pairs[0].0, "n'");
    }

    #[test]
    fn error_empty_key() {
        let err = parse_romaji_toml("[syllables]\n\"\" = \"あ\"\n").unwrap_err();
        assert!(matches!(err, RomajiConfigError::EmptyKey));
    }

    #[test]
    fn error_invalid_key() {
        let toml = "
[syllables]
\"あ\" = \"a\"
";
        let err = parse_romaji_toml(toml).unwrap_err();
        assert!(matches!(err, RomajiConfigError::InvalidKey(_)));

        let err = parse_romaji_toml("[syllables]\n\"k-\" = \"か\"\n").unwrap_err();
        assert!(matches!(err, RomajiConfigError::InvalidKey(_)));
    }

    #[test]
    fn error_empty_value() {
        let toml = r#"
[syllables]
a = ""
"#;
        let err = parse_romaji_toml(toml).unwrap_err();
        assert!(matches!(err, RomajiConfigError::EmptyValue(_)));
    }

    #[test]
    fn error_latin_value() {
        let err = parse_romaji_toml("[syllables]\nka = \"kか\"\n").unwrap_err();
        assert!(matches!(err, RomajiConfigError::LatinValue(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_romaji_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, RomajiConfigError::Parse(_)));
    }
}
