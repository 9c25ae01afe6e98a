//! Core deterministic primitives.
//!
//! Everything a board is derived from: the seed, the sequence generator
//! and the fingerprint used to compare boards.

pub mod rng;
pub mod seed;
pub mod hash;

// Re-export core types
pub use rng::{DrawBoundError, DrawSource, SequenceGenerator};
pub use seed::{Seed, SeedError, SEED_MAX, SEED_MIN};
pub use hash::{check_code, compute_board_hash, BoardHash};
