//! Session Actions
//!
//! Everything a player can do to a board, independent of any widget toolkit.
//! Actions can also be parsed from a short text command.

use std::str::SplitWhitespace;

use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::share::link::seed_text;

/// A player action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "arg", rename_all = "snake_case")]
pub enum Action {
    /// Start over with a seed derived from the given clock reading.
    NewGame {
        /// Wall-clock milliseconds used as seed entropy.
        now_ms: i64,
    },
    /// Join the game identified by a seed.
    SetSeed(String),
    /// Declare which team this session plays for (per-team reveal).
    SelectTeam(String),
    /// Show every tray (global reveal).
    Reveal,
    /// Draw a new message for a team.
    GenerateMessage(String),
    /// Increment a team's miss counter.
    RecordMiss(String),
    /// Increment a team's interception counter.
    RecordInterception(String),
}

/// Command parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionParseError {
    /// Blank input.
    #[error("empty command")]
    Empty,

    /// Unrecognised verb.
    #[error("unknown command: {0}")]
    Unknown(String),

    /// Verb given without its argument.
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
}

impl Action {
    /// Parse a command such as `miss red` or `seed 12345`.
    ///
    /// `now_ms` is only used by `new`. `seed` also accepts a share link.
    pub fn parse(input: &str, now_ms: i64) -> Result<Self, ActionParseError> {
        let input = input.trim();
        let mut parts = input.split_whitespace();
        let first = parts.next().ok_or(ActionParseError::Empty)?;
        let verb = first.to_lowercase();

        match verb.as_str() {
            "new" => Ok(Action::NewGame { now_ms }),
            "seed" | "join" => {
                let rest = input[first.len()..].trim();
                if rest.is_empty() {
                    return Err(ActionParseError::MissingArgument("seed"));
                }
                Ok(Action::SetSeed(seed_text(rest).to_string()))
            }
            "team" | "select" => Ok(Action::SelectTeam(team_arg(&mut parts, "team")?)),
            "reveal" => Ok(Action::Reveal),
            "message" | "msg" => Ok(Action::GenerateMessage(team_arg(&mut parts, "message")?)),
            "miss" | "strike" => Ok(Action::RecordMiss(team_arg(&mut parts, "miss")?)),
            "intercept" | "interception" => {
                Ok(Action::RecordInterception(team_arg(&mut parts, "intercept")?))
            }
            _ => Err(ActionParseError::Unknown(verb.clone())),
        }
    }
}

fn team_arg(parts: &mut SplitWhitespace<'_>, verb: &'static str) -> Result<String, ActionParseError> {
    parts
        .next()
        .map(str::to_string)
        .ok_or(ActionParseError::MissingArgument(verb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Action::parse("new", 7), Ok(Action::NewGame { now_ms: 7 }));
        assert_eq!(Action::parse("  seed 12345 ", 0), Ok(Action::SetSeed("12345".into())));
        assert_eq!(Action::parse("team Red", 0), Ok(Action::SelectTeam("Red".into())));
        assert_eq!(Action::parse("REVEAL", 0), Ok(Action::Reveal));
        assert_eq!(Action::parse("message blue", 0), Ok(Action::GenerateMessage("blue".into())));
        assert_eq!(Action::parse("strike red", 0), Ok(Action::RecordMiss("red".into())));
        assert_eq!(
            Action::parse("intercept infrared", 0),
            Ok(Action::RecordInterception("infrared".into()))
        );
    }

    #[test]
    fn test_parse_seed_keeps_inner_text() {
        assert_eq!(Action::parse("seed my game", 0), Ok(Action::SetSeed("my game".into())));
        assert_eq!(
            Action::parse("join decrypto.vercel.app/player?54321", 0),
            Ok(Action::SetSeed("54321".into()))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Action::parse("   ", 0), Err(ActionParseError::Empty));
        assert_eq!(Action::parse("seed", 0), Err(ActionParseError::MissingArgument("seed")));
        assert_eq!(Action::parse("miss", 0), Err(ActionParseError::MissingArgument("miss")));
        assert_eq!(Action::parse("dance", 0), Err(ActionParseError::Unknown("dance".into())));
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Action::RecordMiss("red".into())).unwrap();
        assert_eq!(json, r#"{"action":"record_miss","arg":"red"}"#);
        let back: Action = serde_json::from_str(r#"{"action":"reveal"}"#).unwrap();
        assert_eq!(back, Action::Reveal);
    }
}
