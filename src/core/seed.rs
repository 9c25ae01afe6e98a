//! Game Seeds
//!
//! A seed is the only thing players need to share to end up with the same
//! board. Fresh seeds are five-digit numbers derived from the clock; seeds
//! typed in by players are taken verbatim.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};
use thiserror::Error;

use super::rng::SequenceGenerator;

/// Smallest generated seed.
pub const SEED_MIN: u32 = 10_000;

/// Largest generated seed.
pub const SEED_MAX: u32 = 99_999;

/// Size of the generated seed range.
const SEED_SPAN: u32 = SEED_MAX - SEED_MIN + 1;

/// Seed input errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    /// Nothing to hash.
    #[error("seed must not be empty")]
    Empty,
}

/// A game seed, kept in its shareable string form.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Seed(String);

impl Seed {
    /// Derive a fresh seed from a wall-clock reading in milliseconds.
    ///
    /// The decimal string of `now_ms` is hashed once and reduced into
    /// `[SEED_MIN, SEED_MAX]`.
    pub fn generate(now_ms: i64) -> Self {
        let raw = SequenceGenerator::new(&now_ms.to_string()).next_u32();
        Self((raw % SEED_SPAN + SEED_MIN).to_string())
    }

    /// Derive a fresh seed from the current time.
    pub fn generate_now() -> Self {
        Self::generate(chrono::Utc::now().timestamp_millis())
    }

    /// Accept any non-empty string as a seed.
    ///
    /// Range is not checked: a seed only has to hash the same way for every
    /// player.
    pub fn parse(input: &str) -> Result<Self, SeedError> {
        if input.is_empty() {
            return Err(SeedError::Empty);
        }
        Ok(Self(input.to_string()))
    }

    /// The seed exactly as shared.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, when the seed is a plain decimal number.
    pub fn number(&self) -> Option<u32> {
        if !self.0.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        self.0.parse().ok()
    }

    /// Whether the seed looks like one produced by [`Seed::generate`].
    pub fn is_canonical(&self) -> bool {
        self.number()
            .is_some_and(|n| (SEED_MIN..=SEED_MAX).contains(&n))
    }

    /// Build the sequence generator every board derives from.
    pub fn generator(&self) -> SequenceGenerator {
        SequenceGenerator::new(&self.0)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Seed {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Seed {
    type Error = SeedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(SeedError::Empty);
        }
        Ok(Self(value))
    }
}

impl From<Seed> for String {
    fn from(seed: Seed) -> Self {
        seed.0
    }
}

// =============================================================================
// TESTS
// =============================================================================
