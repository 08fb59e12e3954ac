//! Words and the dictionary capability
//!
//! Words are normalized once, at load time. Everything downstream compares
//! exact lowercase bytes.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::WORD_LEN;

/// Bundled word list (one lowercase five-letter word per line)
const BUNDLED_WORDS: &str = include_str!("../assets/words.txt");

/// Why a string is not a word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("expected 5 letters, got {0}")]
    Length(usize),
    #[error("invalid character {0:?}")]
    Character(char),
}

/// An immutable five-letter lowercase word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word([u8; WORD_LEN]);

impl Word {
    /// Trim and lowercase, then parse
    pub fn normalize(raw: &str) -> Result<Self, WordError> {
        Self::try_from(raw.trim().to_ascii_lowercase().as_str())
    }

    /// Letter at `index` (0..5)
    #[inline]
    pub fn at(&self, index: usize) -> u8 {
        self.0[index]
    }

    pub fn letters(&self) -> &[u8; WORD_LEN] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII lowercase ever gets in
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl TryFrom<&str> for Word {
    type Error = WordError;

    /// Strict parse: the text must already be five ASCII lowercase letters
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if let Some(bad) = s.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(WordError::Character(bad));
        }
        let bytes: [u8; WORD_LEN] = s
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::Length(s.len()))?;
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for Word {
    type Error = WordError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.as_str().to_string()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of valid words
pub trait WordList {
    /// Exact containment test (no case folding)
    fn contains(&self, word: &str) -> bool;

    /// Every word, in a stable order
    fn all(&self) -> &[Word];
}

/// In-memory dictionary
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    index: HashSet<Word>,
}

impl Dictionary {
    /// Build from whitespace-separated text, skipping anything that isn't a
    /// five-letter word. Duplicates keep their first position.
    pub fn from_text(text: &str) -> Self {
        let mut dict = Self::default();
        let mut rejected = 0usize;
        for token in text.split_whitespace() {
            match Word::normalize(token) {
                Ok(word) => {
                    if dict.index.insert(word) {
                        dict.words.push(word);
                    }
                }
                Err(_) => rejected += 1,
            }
        }
        if rejected > 0 {
            log::warn!("Skipped {} entries that are not five-letter words", rejected);
        }
        dict
    }

    pub fn from_words<I: IntoIterator<Item = Word>>(words: I) -> Self {
        let mut dict = Self::default();
        for word in words {
            if dict.index.insert(word) {
                dict.words.push(word);
            }
        }
        dict
    }

    /// The word list shipped with the crate
    pub fn bundled() -> Self {
        let dict = Self::from_text(BUNDLED_WORDS);
        log::info!("Loaded {} bundled words", dict.len());
        dict
    }

    /// Load a word list from a file
    pub fn load<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let dict = Self::from_text(&text);
        log::info!(
            "Loaded {} words from {}",
            dict.len(),
            path.as_ref().display()
        );
        Ok(dict)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordList for Dictionary {
    fn contains(&self, word: &str) -> bool {
        Word::try_from(word).is_ok_and(|w| self.index.contains(&w))
    }

    fn all(&self) -> &[Word] {
        &self.words
    }
}
