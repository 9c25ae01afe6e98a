//! Session Snapshots
//!
//! Serialisable view of a session as a screen would show it. Hidden trays
//! carry no words, so a snapshot can be shown to anyone at the table.

use serde::{Serialize, Deserialize};

use crate::game::state::Session;

/// One team as displayed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSnapshot {
    /// Team name.
    pub name: String,
    /// Tray words, present only when this session may see them.
    pub words: Option<Vec<String>>,
    /// Miss/strike count.
    pub misses: u32,
    /// Interception count.
    pub interceptions: u32,
    /// Misses at or past the threshold.
    pub losing: bool,
    /// Interceptions at or past the threshold.
    pub winning: bool,
    /// Current message, space separated.
    pub message: Option<String>,
}

/// Whole session as displayed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Seed in play.
    pub seed: Option<String>,
    /// Link for other players.
    pub share_link: Option<String>,
    /// Board fingerprint.
    pub check_code: Option<String>,
    /// Label of the miss counter.
    pub miss_label: String,
    /// Teams in deal order.
    pub teams: Vec<TeamSnapshot>,
}

impl SessionSnapshot {
    /// Capture what `session` shows right now.
    pub fn capture(session: &Session) -> Self {
        let teams = session
            .teams()
            .iter()
            .enumerate()
            .map(|(i, team)| TeamSnapshot {
                name: team.name.clone(),
                words: session
                    .is_visible(i)
                    .then(|| team.words.words().to_vec()),
                misses: team.score.misses,
                interceptions: team.score.interceptions,
                losing: team.score.is_losing(),
                winning: team.score.is_winning(),
                message: team.message.as_ref().map(ToString::to_string),
            })
            .collect();

        Self {
            seed: session.seed().map(ToString::to_string),
            share_link: session.share_link(),
            check_code: session.check_code(),
            miss_label: session.config().miss_label.clone(),
            teams,
        }
    }

    /// Override visibility, e.g. for a host printing every tray.
    pub fn with_all_words(mut self, session: &Session) -> Self {
        for (snapshot, team) in self.teams.iter_mut().zip(session.teams()) {
            snapshot.words = Some(team.words.words().to_vec());
        }
        self
    }
}

impl From<&Session> for SessionSnapshot {
    fn from(session: &Session) -> Self {
        Self::capture(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed::Seed;
    use crate::game::action::Action;
    use crate::game::config::BoardConfig;
    use crate::game::vocabulary::Vocabulary;

    fn session() -> Session {
        Session::with_seed(
            BoardConfig::classic(),
            Vocabulary::builtin(),
            Seed::parse("12345").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_hidden_trays_have_no_words() {
        let snapshot = SessionSnapshot::capture(&session());
        assert_eq!(snapshot.seed.as_deref(), Some("12345"));
        assert_eq!(snapshot.miss_label, "Strikes");
        assert!(snapshot.teams.iter().all(|t| t.words.is_none()));

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(!json.contains("police"));
    }

    #[test]
    fn test_selected_tray_visible() {
        let mut s = session();
        s.apply(Action::SelectTeam("red".into())).unwrap();
        s.apply(Action::RecordMiss("red".into())).unwrap();
        s.apply(Action::RecordMiss("red".into())).unwrap();
        s.apply(Action::GenerateMessage("red".into())).unwrap();

        let snapshot = SessionSnapshot::from(&s);
        let red = &snapshot.teams[0];
        assert_eq!(red.words.as_ref().unwrap(), &["police", "carrot", "king", "luck"]);
        assert_eq!(red.misses, 2);
        assert!(red.losing);
        assert!(!red.winning);
        assert_eq!(red.message.as_deref(), Some("2 4 3"));
        assert!(snapshot.teams[1].words.is_none());
    }

    #[test]
    fn test_with_all_words() {
        let s = session();
        let snapshot = SessionSnapshot::capture(&s).with_all_words(&s);
        assert!(snapshot.teams.iter().all(|t| t.words.is_some()));
    }

    #[test]
    fn test_empty_session() {
        let s = Session::new(BoardConfig::board(), Vocabulary::builtin()).unwrap();
        let snapshot = SessionSnapshot::capture(&s);
        assert!(snapshot.seed.is_none());
        assert!(snapshot.check_code.is_none());
        assert!(snapshot.teams.is_empty());
    }
}
