//! Team Scoreboard
//!
//! Two tallies per team. Two of either usually decides the game, but that is
//! only reflected in display flags; nothing stops counting.

use serde::{Serialize, Deserialize};

/// Tally at which a counter is flagged.
pub const SCORE_FLAG_THRESHOLD: u32 = 2;

/// Outcome of a single increment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Counter value after the increment.
    pub value: u32,
    /// True when this increment moved the counter onto the threshold.
    pub crossed_threshold: bool,
}

/// Miss and interception counters for one team.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScore {
    /// Own clues the team failed to decode (shown as misses or strikes).
    pub misses: u32,
    /// Opposing clues the team intercepted.
    pub interceptions: u32,
}

impl TeamScore {
    /// Record a miss.
    pub fn record_miss(&mut self) -> Tally {
        bump(&mut self.misses)
    }

    /// Record an interception.
    pub fn record_interception(&mut self) -> Tally {
        bump(&mut self.interceptions)
    }

    /// Misses are at or past the threshold (losing display).
    #[inline]
    pub fn is_losing(&self) -> bool {
        self.misses >= SCORE_FLAG_THRESHOLD
    }

    /// Interceptions are at or past the threshold (winning display).
    #[inline]
    pub fn is_winning(&self) -> bool {
        self.interceptions >= SCORE_FLAG_THRESHOLD
    }
}

fn bump(counter: &mut u32) -> Tally {
    *counter = counter.saturating_add(1);
    Tally {
        value: *counter,
        crossed_threshold: *counter == SCORE_FLAG_THRESHOLD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_misses() {
        let mut score = TeamScore::default();
        assert!(!score.is_losing());

        let first = score.record_miss();
        assert_eq!(first, Tally { value: 1, crossed_threshold: false });
        assert!(!score.is_losing());

        let second = score.record_miss();
        assert_eq!(second, Tally { value: 2, crossed_threshold: true });
        assert!(score.is_losing());

        let third = score.record_miss();
        assert_eq!(third, Tally { value: 3, crossed_threshold: false });
        assert!(score.is_losing());
        assert_eq!(score.misses, 3);
        assert_eq!(score.interceptions, 0);
    }

    #[test]
    fn test_interceptions_independent() {
        let mut score = TeamScore::default();
        score.record_interception();
        score.record_interception();
        assert!(score.is_winning());
        assert!(!score.is_losing());
        assert_eq!(score.misses, 0);
    }

    #[test]
    fn test_no_clamp() {
        let mut score = TeamScore::default();
        for _ in 0..10 {
            score.record_interception();
        }
        assert_eq!(score.interceptions, 10);
    }
}
