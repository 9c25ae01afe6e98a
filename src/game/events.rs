//! Session Events
//!
//! What a successfully applied action changed, for display and logging.

use serde::{Serialize, Deserialize};

use crate::core::seed::Seed;
use crate::game::message::ClueMessage;

/// Result of applying one action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A new seed is in play; trays redealt and scores reset.
    GameStarted {
        /// The seed now in play.
        seed: Seed,
        /// Short board fingerprint.
        check_code: String,
    },

    /// A team's tray is now visible to this session.
    TeamSelected {
        /// Team name.
        team: String,
    },

    /// Every tray is now visible.
    TraysRevealed,

    /// A team received a new message.
    MessageGenerated {
        /// Team name.
        team: String,
        /// The message.
        message: ClueMessage,
    },

    /// A miss or strike was recorded.
    MissRecorded {
        /// Team name.
        team: String,
        /// Misses after this one.
        misses: u32,
        /// This miss put the team on the losing threshold.
        reached_threshold: bool,
    },

    /// An interception was recorded.
    InterceptionRecorded {
        /// Team name.
        team: String,
        /// Interceptions after this one.
        interceptions: u32,
        /// This interception put the team on the winning threshold.
        reached_threshold: bool,
    },
}
