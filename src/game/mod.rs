//! Game Logic Module
//!
//! Everything dealt from a seed, plus the session that tracks play.
//!
//! ## Module Structure
//!
//! - `vocabulary`: Word list secret words come from
//! - `words`: Secret word selection
//! - `message`: Clue message generation
//! - `score`: Miss and interception counters
//! - `config`: Board variants
//! - `action`: Player actions
//! - `events`: What an action changed
//! - `state`: Session state machine

pub mod vocabulary;
pub mod words;
pub mod message;
pub mod score;
pub mod config;
pub mod action;
pub mod events;
pub mod state;

// Re-export key types
pub use vocabulary::Vocabulary;
pub use words::{pick_words, SecretWordSet};
pub use message::{pick_message, ClueMessage, MessagePolicy};
pub use score::TeamScore;
pub use config::{BoardConfig, RevealMode, TeamNaming};
pub use action::Action;
pub use events::SessionEvent;
pub use state::{Session, SessionError, TeamBoard};
