//! Board Fingerprints
//!
//! Deterministic hashing of a dealt board so players can check that their
//! independently computed trays agree without revealing any words.

use sha2::{Sha256, Digest};

/// Hash output type (256 bits / 32 bytes)
pub type BoardHash = [u8; 32];

/// Number of digest bytes shown in a check code.
pub const CHECK_CODE_BYTES: usize = 4;

/// Deterministic hasher for board contents.
///
/// Wraps SHA-256. Strings are length-prefixed so that `["ab", "c"]` and
/// `["a", "bc"]` hash differently. Order of updates is critical.
pub struct BoardHasher {
    hasher: Sha256,
}

impl BoardHasher {
    /// Create a new hasher with domain separator.
    pub fn new(domain: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        Self { hasher }
    }

    /// Create hasher for dealt word trays.
    pub fn for_board() -> Self {
        Self::new(b"DECRYPTO_BOARD_V1")
    }

    /// Update with a u32 value (little-endian).
    #[inline]
    pub fn update_u32(&mut self, value: u32) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with a length-prefixed UTF-8 string.
    #[inline]
    pub fn update_str(&mut self, value: &str) {
        self.update_u32(value.len() as u32);
        self.hasher.update(value.as_bytes());
    }

    /// Finalize and return the hash.
    pub fn finalize(self) -> BoardHash {
        self.hasher.finalize().into()
    }
}

/// Compute the fingerprint of a board.
///
/// `teams` yields `(team name, words)` in deal order.
pub fn compute_board_hash<'a, I, W>(seed: &str, teams: I) -> BoardHash
where
    I: IntoIterator<Item = (&'a str, W)>,
    W: IntoIterator<Item = &'a str>,
{
    let mut hasher = BoardHasher::for_board();
    hasher.update_str(seed);

    for (name, words) in teams {
        hasher.update_str(name);
        let words: Vec<&str> = words.into_iter().collect();
        hasher.update_u32(words.len() as u32);
        for word in words {
            hasher.update_str(word);
        }
    }

    hasher.finalize()
}

/// Short hex code players can read out to each other.
pub fn check_code(hash: &BoardHash) -> String {
    hex::encode(&hash[..CHECK_CODE_BYTES])
}

// =============================================================================
// TESTS
// =============================================================================
