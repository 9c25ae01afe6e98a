//! Secret Word Selection
//!
//! Draws a team's secret words from the vocabulary.

use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::core::rng::{DrawBoundError, DrawSource};
use crate::game::vocabulary::Vocabulary;

/// Word selection errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordsError {
    /// The vocabulary cannot supply enough distinct words.
    #[error("vocabulary has {available} distinct words, {requested} required")]
    NotEnoughWords {
        /// Distinct words in the vocabulary.
        available: usize,
        /// Words requested.
        requested: usize,
    },

    /// The vocabulary is too large to index with a single draw.
    #[error("vocabulary has {0} words, more than a draw can address")]
    TooLarge(usize),

    /// Draw failure.
    #[error(transparent)]
    Draw(#[from] DrawBoundError),
}

/// One team's secret words, in tray order (slot 1 first).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretWordSet(Vec<String>);

impl SecretWordSet {
    /// Words in tray order.
    pub fn words(&self) -> &[String] {
        &self.0
    }

    /// Word in 1-based slot `digit`, as a clue digit refers to it.
    pub fn slot(&self, digit: u8) -> Option<&str> {
        let index = usize::from(digit).checked_sub(1)?;
        self.0.get(index).map(String::as_str)
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True only for a zero-word deal.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate words as string slices.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Pick `count` distinct words.
///
/// Each draw selects an index into the vocabulary; repeats are skipped until
/// `count` different words are collected. Fails up front instead of looping
/// when the vocabulary cannot supply that many distinct words.
pub fn pick_words<D: DrawSource + ?Sized>(
    rng: &mut D,
    vocabulary: &Vocabulary,
    count: usize,
) -> Result<SecretWordSet, WordsError> {
    let available = vocabulary.distinct_len();
    if available < count {
        return Err(WordsError::NotEnoughWords { available, requested: count });
    }
    let bound = u32::try_from(vocabulary.len())
        .map_err(|_| WordsError::TooLarge(vocabulary.len()))?;

    let mut words: Vec<String> = Vec::with_capacity(count);
    while words.len() < count {
        let index = rng.draw(bound)? as usize;
        let word = &vocabulary.words()[index];
        if !words.contains(word) {
            words.push(word.clone());
        }
    }

    Ok(SecretWordSet(words))
}

// =============================================================================
// TESTS
// =============================================================================
