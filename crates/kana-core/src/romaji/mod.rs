//! Romaji-to-kana conversion engine.
//!
//! A [`RomajiTable`] is built once from the mapping data and shared
//! read-only. [`convert_romaji`] re-scans the whole raw buffer on every call,
//! handling sokuon (っ), hatsuon (ん) and yōon (きゃ) without carrying parser
//! state between edits.

mod config;
mod convert;
mod table;

#[cfg(test)]
mod proptest_convert;

pub use config::{parse_romaji_toml, validate_pair, RomajiConfigError};
pub use convert::{convert, convert_romaji, NasalPolicy, RomajiConvertResult};
pub use table::{default_toml, RomajiTable};
