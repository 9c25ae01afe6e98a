//! Word Vocabulary
//!
//! The ordered word list secret words are drawn from. Loaded once and shared
//! read-only; indices into it are part of the deal, so order matters.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

/// Bundled default word list.
const BUILTIN_WORDS: &str = include_str!("words.txt");

/// Vocabulary loading errors.
#[derive(Debug, Error)]
pub enum VocabularyError {
    /// No usable words.
    #[error("vocabulary is empty")]
    Empty,

    /// Underlying read failure.
    #[error("failed to read vocabulary: {0}")]
    Io(#[from] io::Error),
}

/// Immutable, cheaply clonable word list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vocabulary {
    words: Arc<[String]>,
}

impl Vocabulary {
    /// Wrap an ordered list of words.
    pub fn new(words: Vec<String>) -> Result<Self, VocabularyError> {
        if words.is_empty() {
            return Err(VocabularyError::Empty);
        }
        Ok(Self { words: words.into() })
    }

    /// The bundled default list.
    pub fn builtin() -> Self {
        let words: Vec<String> = parse_lines(BUILTIN_WORDS.lines()).collect();
        Self { words: words.into() }
    }

    /// Read one word per line. Blank lines and `#` comments are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, VocabularyError> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        Self::new(parse_lines(lines.iter().map(String::as_str)).collect())
    }

    /// Read a word list file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, VocabularyError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed vocabulary.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of distinct entries.
    pub fn distinct_len(&self) -> usize {
        self.words.iter().collect::<BTreeSet<_>>().len()
    }

    /// Word at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// All words in order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Whether `word` is an entry.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

fn parse_lines<'a>(lines: impl Iterator<Item = &'a str> + 'a) -> impl Iterator<Item = String> + 'a {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
}

// =============================================================================
// TESTS
// =============================================================================
