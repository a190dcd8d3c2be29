//! Localized UI strings.
//!
//! The table is a JSON object keyed by language name, each mapping text keys
//! to strings. It is embedded at build time. Lookups fall back to English and
//! then to the key itself, so a missing entry never blanks the screen.

use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::types::Language;

const EMBEDDED: &str = include_str!("../assets/translations.json");

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Translations {
    #[serde(default)]
    english: HashMap<String, String>,
    #[serde(default)]
    tamil: HashMap<String, String>,
}

impl Translations {
    /// The table shipped with the game.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED).context("embedded translation table is malformed")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let table = serde_json::from_str(json).context("failed to parse translation table")?;
        Ok(table)
    }

    fn table(&self, language: Language) -> &HashMap<String, String> {
        match language {
            Language::English => &self.english,
            Language::Tamil => &self.tamil,
        }
    }

    /// Text for `key` in `language`.
    pub fn text<'a>(&'a self, language: Language, key: &'a str) -> &'a str {
        self.table(language)
            .get(key)
            .or_else(|| self.english.get(key))
            .map(String::as_str)
            .unwrap_or(key)
    }

    pub fn contains(&self, language: Language, key: &str) -> bool {
        self.table(language).contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_table_parses() {
        let t = Translations::embedded().unwrap();
        assert_eq!(t.text(Language::English, "score"), "Score");
        assert_eq!(t.text(Language::Tamil, "score"), "மதிப்பெண்");
    }

    #[test]
    fn every_tamil_key_exists_in_english() {
        let t = Translations::embedded().unwrap();
        for key in t.tamil.keys() {
            assert!(t.contains(Language::English, key), "missing english {key}");
        }
    }

    #[test]
    fn missing_keys_fall_back() {
        let t = Translations::from_json(r#"{"english": {"a": "A"}, "tamil": {}}"#).unwrap();
        assert_eq!(t.text(Language::Tamil, "a"), "A");
        assert_eq!(t.text(Language::Tamil, "nope"), "nope");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Translations::from_json("{").is_err());
    }
}
