//! Clue Messages
//!
//! The short digit code an encryptor has to clue for their team.

use std::fmt;

use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::core::rng::{DrawBoundError, DrawSource};

/// Highest digit a message can carry.
pub const MAX_DIGIT_RANGE: u32 = u8::MAX as u32;

/// Longest message that can be drawn.
pub const MAX_MESSAGE_LENGTH: usize = u8::MAX as usize;

/// Whether digits of a message may repeat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessagePolicy {
    /// Independent draws; `1 1 4` is possible.
    WithRepeats,
    /// Every digit differs.
    Distinct,
}

/// Message generation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// Distinct policy cannot fill the message.
    #[error("cannot draw {length} distinct digits from 1..={digit_range}")]
    NotEnoughDigits {
        /// Highest digit.
        digit_range: u32,
        /// Digits requested.
        length: usize,
    },

    /// Digit range does not fit a clue digit.
    #[error("digit range {0} is outside 1..=255")]
    BadRange(u32),

    /// Message longer than [`MAX_MESSAGE_LENGTH`].
    #[error("message length {0} exceeds 255")]
    TooLong(usize),

    /// Draw failure.
    #[error(transparent)]
    Draw(#[from] DrawBoundError),
}

/// A clue message: digits in `[1, digit_range]`, in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueMessage(Vec<u8>);

impl ClueMessage {
    /// Digits in order.
    pub fn digits(&self) -> &[u8] {
        &self.0
    }

    /// Whether no digit repeats.
    pub fn is_distinct(&self) -> bool {
        self.0
            .iter()
            .enumerate()
            .all(|(i, d)| !self.0[..i].contains(d))
    }
}

impl fmt::Display for ClueMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, digit) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

/// Draw a message of `length` digits in `[1, digit_range]`.
pub fn pick_message<D: DrawSource + ?Sized>(
    rng: &mut D,
    digit_range: u32,
    length: usize,
    policy: MessagePolicy,
) -> Result<ClueMessage, MessageError> {
    if digit_range == 0 || digit_range > MAX_DIGIT_RANGE {
        return Err(MessageError::BadRange(digit_range));
    }
    if length > MAX_MESSAGE_LENGTH {
        return Err(MessageError::TooLong(length));
    }
    if policy == MessagePolicy::Distinct && (digit_range as usize) < length {
        return Err(MessageError::NotEnoughDigits { digit_range, length });
    }

    let mut digits = Vec::with_capacity(length);
    while digits.len() < length {
        let digit = (rng.draw(digit_range)? + 1) as u8;
        if policy == MessagePolicy::WithRepeats || !digits.contains(&digit) {
            digits.push(digit);
        }
    }

    Ok(ClueMessage(digits))
}

// =============================================================================
// TESTS
// =============================================================================
