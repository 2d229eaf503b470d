// File: src/lexicon.rs
use crate::error::Result;
use crate::persistence::{load_from_disk, save_to_disk};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use unicode_normalization::UnicodeNormalization;

/// Words whose pronunciation the rules get wrong, mapped to the
/// pronunciation to emit instead. Keys are stored NFC-normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    entries: HashMap<String, String>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object of `"word": "pronunciation"` pairs.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: HashMap<String, String> = serde_json::from_str(json)?;
        let mut lexicon = Self::new();
        for (word, pron) in raw {
            lexicon.insert(&word, &pron);
        }
        Ok(lexicon)
    }

    pub fn insert(&mut self, word: &str, pronunciation: &str) -> Option<String> {
        self.entries
            .insert(word.nfc().collect(), pronunciation.to_string())
    }

    pub fn remove(&mut self, word: &str) -> Option<String> {
        self.entries.remove(&word.nfc().collect::<String>())
    }

    /// `word` is expected to be NFC already, as it is inside the engine.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        save_to_disk(self, path)?;
        log::debug!("saved {} lexicon entries to {}", self.len(), path.display());
        Ok(())
    }

    /// A `.json` file is read as a word-to-pronunciation object, anything
    /// else as a file written by [`Lexicon::save`].
    pub fn load(path: &Path) -> Result<Self> {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let lexicon = if is_json {
            Self::from_json_str(&fs::read_to_string(path)?)?
        } else {
            load_from_disk(path)?
        };
        log::debug!(
            "loaded {} lexicon entries from {}",
            lexicon.len(),
            path.display()
        );
        Ok(lexicon)
    }
}
