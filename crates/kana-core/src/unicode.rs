//! Character-level Unicode classification for Japanese text.

/// Check the full Hiragana block (U+3040..U+309F). This includes a few unassigned
/// codepoints (U+3040, U+3097-3098) but these never appear in typed input or
/// target readings, so the block-level check is enough.
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF), which includes ー (U+30FC).
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Convert a hiragana string to katakana.
/// Non-hiragana characters (ー, ASCII, pending romaji) are passed through unchanged.
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if is_hiragana(c) {
                char::from_u32(c as u32 + 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Characters allowed in a romaji key: lower-case ASCII letters and `'`.
pub fn is_romaji_letter(c: char) -> bool {
    c.is_ascii_lowercase() || c == '\''
}

pub fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// Lower-case ASCII consonant (anything in `a-z` that is not a vowel).
pub fn is_consonant(c: char) -> bool {
    c.is_ascii_lowercase() && !is_vowel(c)
}

/// Length of a reading in morae, counted as Unicode scalar values.
pub fn mora_len(s: &str) -> usize {
    s.chars().count()
}

/// Check if a string is a valid hiragana reading.
///
/// Accepts hiragana and the prolonged sound mark ー (U+30FC), which appears in
/// readings like "らーめん". Whether a reading can actually be typed depends on
/// the table: see `RomajiTable::can_produce`.
pub fn is_hiragana_reading(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_hiragana(c) || c == 'ー')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hiragana_reading() {
        assert!(is_hiragana_reading("がっこう"));
        assert!(is_hiragana_reading("らーめん"));
        assert!(!is_hiragana_reading("カタカナ"));
        assert!(!is_hiragana_reading("abc"));
        assert!(!is_hiragana_reading(""));
    }

    #[test]
    fn test_hiragana_to_katakana() {
        assert_eq!(hiragana_to_katakana("きょうは"), "キョウハ");
        assert_eq!(hiragana_to_katakana("らーめん"), "ラーメン");
        assert_eq!(hiragana_to_katakana("がっこk"), "ガッコk");
        assert_eq!(hiragana_to_katakana(""), "");
    }

    #[test]
    fn test_char_classification() {
        assert!(is_hiragana('あ'));
        assert!(!is_hiragana('ア'));
        assert!(is_katakana('ア'));
        assert!(is_katakana('ー'));
        assert!(!is_katakana('あ'));
        assert!(is_latin('K'));
        assert!(is_latin('k'));
        assert!(!is_latin('\''));
        assert!(!is_latin('か'));
        assert!(is_romaji_letter('\''));
        assert!(!is_romaji_letter('A'));
        assert!(!is_romaji_letter('’'));
        assert!(is_consonant('k'));
        assert!(is_consonant('y'));
        assert!(!is_consonant('a'));
        assert!(!is_consonant('\''));
    }

    #[test]
    fn test_mora_len_counts_scalars() {
        assert_eq!(mora_len("がっこう"), 4);
        assert_eq!(mora_len("きゃ"), 2);
        assert_eq!(mora_len(""), 0);
    }
}
