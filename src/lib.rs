//! # Decrypto Board
//!
//! Deterministic seeds, word trays and clue messages for Decrypto-style games.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     DECRYPTO BOARD                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/            - Deterministic primitives                 │
//! │  ├── rng.rs       - String-seeded sequence generator         │
//! │  ├── seed.rs      - Game seeds from the clock or players     │
//! │  └── hash.rs      - Board fingerprints                       │
//! │                                                              │
//! │  game/            - Game logic (deterministic)               │
//! │  ├── vocabulary.rs- Word list                                │
//! │  ├── words.rs     - Secret word selection                    │
//! │  ├── message.rs   - Clue message generation                  │
//! │  ├── score.rs     - Miss and interception counters           │
//! │  ├── config.rs    - Board variants                           │
//! │  ├── action.rs    - Player actions                           │
//! │  ├── events.rs    - Action results                           │
//! │  └── state.rs     - Session state machine                    │
//! │                                                              │
//! │  share/           - Leaving the session                      │
//! │  ├── link.rs      - Share links                              │
//! │  └── snapshot.rs  - Serialisable session views               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! There is no server. Every player opens their own board and computes it
//! from the shared seed:
//! - The generator is a pure function of the seed string and the draws made
//! - Trays are dealt in team order before any message is drawn
//! - The clock is only read to pick a fresh seed
//!
//! Two boards with the same seed and the same draw order show **identical**
//! words and messages.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;
pub mod share;

// Re-export commonly used types
pub use crate::core::rng::{DrawSource, SequenceGenerator};
pub use crate::core::seed::Seed;
pub use crate::game::action::Action;
pub use crate::game::config::BoardConfig;
pub use crate::game::state::{Session, SessionError};
pub use crate::game::vocabulary::Vocabulary;
pub use crate::share::snapshot::SessionSnapshot;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Words per team; clue digits run from 1 to this value.
pub const CODE_BASE: u32 = 4;

/// Digits per clue message.
pub const CODE_LENGTH: usize = 3;
