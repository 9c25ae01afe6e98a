//! Board Configuration
//!
//! The three ways the board has been played (classic table, host display,
//! player view) differ only in the settings below.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::game::message::{MessagePolicy, MAX_DIGIT_RANGE, MAX_MESSAGE_LENGTH};
use crate::game::vocabulary::Vocabulary;
use crate::{CODE_BASE, CODE_LENGTH};

/// Default base of shareable player links.
pub const DEFAULT_SHARE_BASE: &str = "decrypto.vercel.app/player";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No teams configured.
    #[error("at least one team is required")]
    NoTeams,

    /// Empty team name.
    #[error("team names must not be empty")]
    EmptyTeamName,

    /// Two teams share a name.
    #[error("duplicate team name: {0}")]
    DuplicateTeam(String),

    /// Zero words per team.
    #[error("code base must be at least 1")]
    ZeroCodeBase,

    /// Zero-digit messages.
    #[error("code length must be at least 1")]
    ZeroCodeLength,

    /// Messages longer than a clue can be.
    #[error("code length {0} exceeds {max}", max = MAX_MESSAGE_LENGTH)]
    CodeLengthTooLarge(usize),

    /// Message digits beyond what a clue digit can hold.
    #[error("code base {0} exceeds {max} while messages are enabled", max = MAX_DIGIT_RANGE)]
    CodeBaseTooLarge(u32),

    /// Distinct messages longer than the digit range.
    #[error("distinct messages need code length {length} <= code base {base}")]
    DistinctTooLong {
        /// Words per team.
        base: u32,
        /// Digits per message.
        length: usize,
    },

    /// Vocabulary cannot fill a tray.
    #[error("vocabulary has {available} distinct words, {required} required per team")]
    VocabularyTooSmall {
        /// Distinct words available.
        available: usize,
        /// Words per team.
        required: usize,
    },

    /// Config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for a board.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Team naming scheme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamNaming {
    /// `red` and `blue`.
    RedBlue,
    /// `infrared` and `ultraviolet`.
    InfraredUltraviolet,
    /// Any list of names, in deal order.
    Custom(Vec<String>),
}

impl TeamNaming {
    /// Team names in deal order.
    pub fn names(&self) -> Vec<String> {
        match self {
            TeamNaming::RedBlue => vec!["red".into(), "blue".into()],
            TeamNaming::InfraredUltraviolet => vec!["infrared".into(), "ultraviolet".into()],
            TeamNaming::Custom(names) => names.clone(),
        }
    }
}

/// Who gets to see word trays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealMode {
    /// Choosing a team shows that team's tray only.
    PerTeam,
    /// One reveal shows every tray for the current seed.
    Global,
}

/// Board configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Team naming scheme.
    pub teams: TeamNaming,
    /// Words per team; messages use digits `1..=code_base`.
    pub code_base: u32,
    /// Digits per message.
    pub code_length: usize,
    /// Message policy, or `None` when the board has no message generator.
    pub messages: Option<MessagePolicy>,
    /// Reveal scope.
    pub reveal: RevealMode,
    /// Label for the miss counter ("Misses" or "Strikes").
    pub miss_label: String,
    /// Base of the shareable player link.
    pub share_base: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl BoardConfig {
    /// Single-screen table: red/blue, repeating digits, pick your team.
    pub fn classic() -> Self {
        Self {
            teams: TeamNaming::RedBlue,
            code_base: CODE_BASE,
            code_length: CODE_LENGTH,
            messages: Some(MessagePolicy::WithRepeats),
            reveal: RevealMode::PerTeam,
            miss_label: "Strikes".into(),
            share_base: DEFAULT_SHARE_BASE.into(),
        }
    }

    /// Host display: scoreboard only, one reveal for the whole table.
    pub fn board() -> Self {
        Self {
            teams: TeamNaming::InfraredUltraviolet,
            messages: None,
            reveal: RevealMode::Global,
            miss_label: "Misses".into(),
            ..Self::classic()
        }
    }

    /// Per-player view opened from a share link; distinct digits.
    pub fn player() -> Self {
        Self {
            teams: TeamNaming::InfraredUltraviolet,
            messages: Some(MessagePolicy::Distinct),
            reveal: RevealMode::PerTeam,
            miss_label: "Misses".into(),
            ..Self::classic()
        }
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let names = self.teams.names();
        if names.is_empty() {
            return Err(ConfigError::NoTeams);
        }
        let mut seen = BTreeSet::new();
        for name in &names {
            if name.trim().is_empty() {
                return Err(ConfigError::EmptyTeamName);
            }
            if !seen.insert(name.to_lowercase()) {
                return Err(ConfigError::DuplicateTeam(name.clone()));
            }
        }

        if self.code_base == 0 {
            return Err(ConfigError::ZeroCodeBase);
        }
        if self.code_length == 0 {
            return Err(ConfigError::ZeroCodeLength);
        }
        if self.code_length > MAX_MESSAGE_LENGTH {
            return Err(ConfigError::CodeLengthTooLarge(self.code_length));
        }
        if self.messages.is_some() && self.code_base > MAX_DIGIT_RANGE {
            return Err(ConfigError::CodeBaseTooLarge(self.code_base));
        }
        if self.messages == Some(MessagePolicy::Distinct)
            && (self.code_base as usize) < self.code_length
        {
            return Err(ConfigError::DistinctTooLong {
                base: self.code_base,
                length: self.code_length,
            });
        }
        Ok(())
    }

    /// Check that `vocabulary` can fill every tray.
    pub fn validate_vocabulary(&self, vocabulary: &Vocabulary) -> Result<(), ConfigError> {
        let available = vocabulary.distinct_len();
        let required = self.code_base as usize;
        if available < required {
            return Err(ConfigError::VocabularyTooSmall { available, required });
        }
        Ok(())
    }
}
