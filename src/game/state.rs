//! Session State
//!
//! One open board: the seed in play, every team's tray, scores and current
//! message, and what this session is allowed to see. All changes go through
//! [`Session::apply`].
//!
//! # Draw Order
//!
//! A fresh generator is built from the seed whenever the seed changes. Trays
//! are dealt first, in team order; messages then continue from the same
//! generator in the order they are requested. Any two sessions that follow the
//! same order show the same words and messages.

use serde::{Serialize, Deserialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::core::hash::{check_code, compute_board_hash, BoardHash};
use crate::core::rng::SequenceGenerator;
use crate::core::seed::{Seed, SeedError};
use crate::game::action::Action;
use crate::game::config::{BoardConfig, ConfigError, RevealMode};
use crate::game::events::SessionEvent;
use crate::game::message::{pick_message, ClueMessage, MessageError};
use crate::game::score::TeamScore;
use crate::game::vocabulary::Vocabulary;
use crate::game::words::{pick_words, SecretWordSet, WordsError};
use crate::share::link::{player_link, player_url};

/// Session errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No seed entered yet.
    #[error("no game in progress, start one or enter a seed")]
    NoGame,

    /// Team name not on this board.
    #[error("unknown team: {0}")]
    UnknownTeam(String),

    /// Action not offered by this board's configuration.
    #[error("{0} is not available on this board")]
    Unsupported(&'static str),

    /// Rejected seed input.
    #[error("invalid seed: {0}")]
    InvalidSeed(#[from] SeedError),

    /// Invalid configuration or vocabulary.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Tray deal failure.
    #[error(transparent)]
    Words(#[from] WordsError),

    /// Message draw failure.
    #[error(transparent)]
    Message(#[from] MessageError),
}

/// One team's side of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamBoard {
    /// Team name.
    pub name: String,
    /// Secret words in tray order.
    pub words: SecretWordSet,
    /// Miss and interception counters.
    pub score: TeamScore,
    /// Message most recently generated for the team.
    pub message: Option<ClueMessage>,
}

/// Everything derived from one seed.
#[derive(Clone, Debug)]
struct Game {
    seed: Seed,
    rng: SequenceGenerator,
    teams: Vec<TeamBoard>,
    hash: BoardHash,
    selected: Option<usize>,
    revealed: bool,
}

/// A single board session.
#[derive(Clone, Debug)]
pub struct Session {
    config: BoardConfig,
    vocabulary: Vocabulary,
    game: Option<Game>,
}

impl Session {
    /// Create a session with no game in progress.
    ///
    /// Fails fast when the configuration or vocabulary could never deal a
    /// board.
    pub fn new(config: BoardConfig, vocabulary: Vocabulary) -> Result<Self, SessionError> {
        config.validate()?;
        config.validate_vocabulary(&vocabulary)?;
        Ok(Self { config, vocabulary, game: None })
    }

    /// Create a session and deal the board for `seed`.
    pub fn with_seed(
        config: BoardConfig,
        vocabulary: Vocabulary,
        seed: Seed,
    ) -> Result<Self, SessionError> {
        let mut session = Self::new(config, vocabulary)?;
        session.start(seed)?;
        Ok(session)
    }

    /// Apply one action.
    pub fn apply(&mut self, action: Action) -> Result<SessionEvent, SessionError> {
        match action {
            Action::NewGame { now_ms } => self.start(Seed::generate(now_ms)),
            Action::SetSeed(input) => self.start(Seed::parse(&input)?),
            Action::SelectTeam(team) => self.select_team(&team),
            Action::Reveal => self.reveal(),
            Action::GenerateMessage(team) => self.generate_message(&team),
            Action::RecordMiss(team) => self.record_miss(&team),
            Action::RecordInterception(team) => self.record_interception(&team),
        }
    }

    /// Deal a fresh board for `seed`, discarding all previous state.
    pub fn start(&mut self, seed: Seed) -> Result<SessionEvent, SessionError> {
        if !seed.is_canonical() {
            debug!("Seed {:?} is outside the generated range", seed.as_str());
        }

        let mut rng = seed.generator();
        let mut teams = Vec::new();
        for name in self.config.teams.names() {
            let words = pick_words(&mut rng, &self.vocabulary, self.config.code_base as usize)?;
            teams.push(TeamBoard {
                name,
                words,
                score: TeamScore::default(),
                message: None,
            });
        }

        let hash = compute_board_hash(
            seed.as_str(),
            teams.iter().map(|t| (t.name.as_str(), t.words.iter())),
        );
        let code = check_code(&hash);
        info!("Game {} dealt, check code {}", seed, code);

        self.game = Some(Game {
            seed: seed.clone(),
            rng,
            teams,
            hash,
            selected: None,
            revealed: false,
        });

        Ok(SessionEvent::GameStarted { seed, check_code: code })
    }

    fn select_team(&mut self, team: &str) -> Result<SessionEvent, SessionError> {
        if self.config.reveal != RevealMode::PerTeam {
            return Err(SessionError::Unsupported("choosing a team"));
        }
        let index = self.team_index(team)?;
        let game = self.game_mut()?;
        game.selected = Some(index);
        let name = game.teams[index].name.clone();
        debug!("Session plays for team {}", name);
        Ok(SessionEvent::TeamSelected { team: name })
    }

    fn reveal(&mut self) -> Result<SessionEvent, SessionError> {
        if self.config.reveal != RevealMode::Global {
            return Err(SessionError::Unsupported("revealing every tray"));
        }
        let game = self.game_mut()?;
        game.revealed = true;
        debug!("Trays revealed for game {}", game.seed);
        Ok(SessionEvent::TraysRevealed)
    }

    fn generate_message(&mut self, team: &str) -> Result<SessionEvent, SessionError> {
        let policy = self
            .config
            .messages
            .ok_or(SessionError::Unsupported("message generation"))?;
        let (base, length) = (self.config.code_base, self.config.code_length);
        let index = self.team_index(team)?;
        let game = self.game_mut()?;

        let message = pick_message(&mut game.rng, base, length, policy)?;
        let board = &mut game.teams[index];
        board.message = Some(message.clone());
        debug!("Team {} message: {}", board.name, message);

        Ok(SessionEvent::MessageGenerated { team: board.name.clone(), message })
    }

    fn record_miss(&mut self, team: &str) -> Result<SessionEvent, SessionError> {
        let board = self.team_board_mut(team)?;
        let tally = board.score.record_miss();
        if tally.crossed_threshold {
            info!("Team {} is on {} misses", board.name, tally.value);
        }
        Ok(SessionEvent::MissRecorded {
            team: board.name.clone(),
            misses: tally.value,
            reached_threshold: tally.crossed_threshold,
        })
    }

    fn record_interception(&mut self, team: &str) -> Result<SessionEvent, SessionError> {
        let board = self.team_board_mut(team)?;
        let tally = board.score.record_interception();
        if tally.crossed_threshold {
            info!("Team {} is on {} interceptions", board.name, tally.value);
        }
        Ok(SessionEvent::InterceptionRecorded {
            team: board.name.clone(),
            interceptions: tally.value,
            reached_threshold: tally.crossed_threshold,
        })
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Board configuration.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Whether a seed is in play.
    pub fn has_game(&self) -> bool {
        self.game.is_some()
    }

    /// Seed in play.
    pub fn seed(&self) -> Option<&Seed> {
        self.game.as_ref().map(|g| &g.seed)
    }

    /// Teams in deal order (empty before the first seed).
    pub fn teams(&self) -> &[TeamBoard] {
        self.game.as_ref().map(|g| g.teams.as_slice()).unwrap_or(&[])
    }

    /// Team by (case-insensitive) name.
    pub fn team(&self, name: &str) -> Option<&TeamBoard> {
        let index = self.team_index(name).ok()?;
        self.teams().get(index)
    }

    /// Team this session plays for, if one was chosen.
    pub fn selected_team(&self) -> Option<&TeamBoard> {
        let game = self.game.as_ref()?;
        game.selected.map(|i| &game.teams[i])
    }

    /// Whether the tray of team `index` is visible to this session.
    pub fn is_visible(&self, index: usize) -> bool {
        match &self.game {
            Some(game) => match self.config.reveal {
                RevealMode::PerTeam => game.selected == Some(index),
                RevealMode::Global => game.revealed,
            },
            None => false,
        }
    }

    /// Board fingerprint.
    pub fn board_hash(&self) -> Option<BoardHash> {
        self.game.as_ref().map(|g| g.hash)
    }

    /// Short fingerprint players can compare.
    pub fn check_code(&self) -> Option<String> {
        self.board_hash().map(|h| check_code(&h))
    }

    /// Link that opens this game on another device.
    pub fn share_link(&self) -> Option<String> {
        self.seed().map(|s| player_link(&self.config.share_base, s))
    }

    /// [`Session::share_link`] as an https URL.
    pub fn share_url(&self) -> Option<String> {
        self.seed().map(|s| player_url(&self.config.share_base, s))
    }

    fn team_index(&self, name: &str) -> Result<usize, SessionError> {
        self.config
            .teams
            .names()
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name))
            .ok_or_else(|| SessionError::UnknownTeam(name.to_string()))
    }

    fn game_mut(&mut self) -> Result<&mut Game, SessionError> {
        self.game.as_mut().ok_or(SessionError::NoGame)
    }

    fn team_board_mut(&mut self, name: &str) -> Result<&mut TeamBoard, SessionError> {
        let index = self.team_index(name)?;
        Ok(&mut self.game_mut()?.teams[index])
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::TeamNaming;
    use crate::game::message::MessagePolicy;

    fn numbered_vocab(n: usize) -> Vocabulary {
        Vocabulary::new((0..n).map(|i| format!("w{i}")).collect()).unwrap()
    }

    fn session(config: BoardConfig, seed: &str) -> Session {
        Session::with_seed(config, Vocabulary::builtin(), Seed::parse(seed).unwrap()).unwrap()
    }

    #[test]
    fn test_known_board() {
        let s = session(BoardConfig::classic(), "12345");
        let teams = s.teams();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].name, "red");
        assert_eq!(teams[0].words.words(), &["police", "carrot", "king", "luck"]);
        assert_eq!(teams[1].name, "blue");
        assert_eq!(teams[1].words.words(), &["missile", "princess", "face", "novel"]);
    }

    #[test]
    fn test_known_messages_follow_deal() {
        let mut s = session(BoardConfig::classic(), "12345");
        let first = s.apply(Action::GenerateMessage("red".into())).unwrap();
        let second = s.apply(Action::GenerateMessage("blue".into())).unwrap();

        match (first, second) {
            (
                SessionEvent::MessageGenerated { message: m1, .. },
                SessionEvent::MessageGenerated { message: m2, .. },
            ) => {
                assert_eq!(m1.to_string(), "2 4 3");
                assert_eq!(m2.to_string(), "2 2 4");
            }
            other => panic!("unexpected events: {other:?}"),
        }
        assert_eq!(s.team("red").unwrap().message.as_ref().unwrap().to_string(), "2 4 3");
    }

    #[test]
    fn test_team_names_share_the_deal() {
        // Naming does not affect the draw order
        let classic = session(BoardConfig::classic(), "12345");
        let player = session(BoardConfig::player(), "12345");
        assert_eq!(player.teams()[0].name, "infrared");
        assert_eq!(classic.teams()[0].words, player.teams()[0].words);
        assert_eq!(classic.teams()[1].words, player.teams()[1].words);
    }

    #[test]
    fn test_independent_sessions_agree() {
        let mut a = session(BoardConfig::player(), "31337");
        let mut b = session(BoardConfig::player(), "31337");
        assert_eq!(a.teams(), b.teams());
        assert_eq!(a.check_code(), b.check_code());

        for team in ["infrared", "ultraviolet", "infrared", "infrared"] {
            let ea = a.apply(Action::GenerateMessage(team.into())).unwrap();
            let eb = b.apply(Action::GenerateMessage(team.into())).unwrap();
            assert_eq!(ea, eb);
        }
    }

    #[test]
    fn test_different_seed_different_board() {
        let a = session(BoardConfig::classic(), "12345");
        let b = session(BoardConfig::classic(), "12346");
        assert_ne!(a.teams()[0].words, b.teams()[0].words);
        assert_ne!(a.check_code(), b.check_code());
    }

    #[test]
    fn test_small_vocabulary_is_permutation() {
        let vocab = Vocabulary::new(vec!["a".into(), "b".into(), "c".into(), "d".into()]).unwrap();
        for seed in ["1", "12345", "anything"] {
            let s = Session::with_seed(BoardConfig::classic(), vocab.clone(), Seed::parse(seed).unwrap())
                .unwrap();
            for team in s.teams() {
                let mut words = team.words.words().to_vec();
                words.sort();
                assert_eq!(words, ["a", "b", "c", "d"]);
            }
        }
    }

    #[test]
    fn test_seed_change_resets() {
        let mut s = session(BoardConfig::classic(), "12345");
        s.apply(Action::SelectTeam("red".into())).unwrap();
        s.apply(Action::RecordMiss("red".into())).unwrap();
        s.apply(Action::RecordInterception("blue".into())).unwrap();
        s.apply(Action::GenerateMessage("red".into())).unwrap();
        assert!(s.is_visible(0));

        let event = s.apply(Action::SetSeed("54321".into())).unwrap();
        assert!(matches!(event, SessionEvent::GameStarted { ref seed, .. } if seed.as_str() == "54321"));
        assert!(!s.is_visible(0));
        assert!(s.selected_team().is_none());
        for team in s.teams() {
            assert_eq!(team.score, TeamScore::default());
            assert!(team.message.is_none());
        }
    }

    #[test]
    fn test_new_game_uses_clock() {
        let mut s = Session::new(BoardConfig::classic(), Vocabulary::builtin()).unwrap();
        assert!(!s.has_game());
        s.apply(Action::NewGame { now_ms: 1_700_000_000_000 }).unwrap();
        assert_eq!(s.seed().unwrap().as_str(), "59481");
        assert_eq!(s.teams()[0].words.words(), &["hospital", "soul", "log", "vacuum"]);
        assert_eq!(s.teams()[1].words.words(), &["forest", "thief", "air", "snow"]);
    }

    #[test]
    fn test_miss_threshold() {
        let mut s = session(BoardConfig::classic(), "12345");
        let events: Vec<SessionEvent> = (0..3)
            .map(|_| s.apply(Action::RecordMiss("blue".into())).unwrap())
            .collect();

        let flags: Vec<bool> = events
            .iter()
            .map(|e| match e {
                SessionEvent::MissRecorded { reached_threshold, .. } => *reached_threshold,
                other => panic!("unexpected event: {other:?}"),
            })
            .collect();
        assert_eq!(flags, [false, true, false]);

        let blue = s.team("blue").unwrap();
        assert_eq!(blue.score.misses, 3);
        assert!(blue.score.is_losing());
        assert_eq!(s.team("red").unwrap().score.misses, 0);
    }

    #[test]
    fn test_per_team_reveal() {
        let mut s = session(BoardConfig::player(), "12345");
        assert!(!s.is_visible(0) && !s.is_visible(1));

        s.apply(Action::SelectTeam("ULTRAVIOLET".into())).unwrap();
        assert!(!s.is_visible(0));
        assert!(s.is_visible(1));
        assert_eq!(s.selected_team().unwrap().name, "ultraviolet");

        s.apply(Action::SelectTeam("infrared".into())).unwrap();
        assert!(s.is_visible(0));
        assert!(!s.is_visible(1));

        assert!(matches!(s.apply(Action::Reveal), Err(SessionError::Unsupported(_))));
    }

    #[test]
    fn test_global_reveal() {
        let mut s = session(BoardConfig::board(), "12345");
        assert!(!s.is_visible(0));
        assert_eq!(s.apply(Action::Reveal).unwrap(), SessionEvent::TraysRevealed);
        assert!(s.is_visible(0) && s.is_visible(1));

        assert!(matches!(
            s.apply(Action::SelectTeam("infrared".into())),
            Err(SessionError::Unsupported(_))
        ));
        assert!(matches!(
            s.apply(Action::GenerateMessage("infrared".into())),
            Err(SessionError::Unsupported(_))
        ));
    }

    #[test]
    fn test_distinct_messages() {
        let mut s = session(BoardConfig::player(), "777");
        for _ in 0..50 {
            match s.apply(Action::GenerateMessage("infrared".into())).unwrap() {
                SessionEvent::MessageGenerated { message, .. } => {
                    assert!(message.is_distinct());
                    assert_eq!(message.digits().len(), 3);
                }
                other => panic!("unexpected event: {other:?}"),
            }
        }
    }

    #[test]
    fn test_errors() {
        let mut s = Session::new(BoardConfig::classic(), Vocabulary::builtin()).unwrap();
        assert!(matches!(s.apply(Action::RecordMiss("red".into())), Err(SessionError::NoGame)));
        assert!(matches!(s.apply(Action::SetSeed(String::new())), Err(SessionError::InvalidSeed(_))));
        assert!(!s.has_game());

        s.apply(Action::SetSeed("12345".into())).unwrap();
        assert!(matches!(
            s.apply(Action::RecordMiss("green".into())),
            Err(SessionError::UnknownTeam(ref t)) if t == "green"
        ));
    }

    #[test]
    fn test_invalid_seed_keeps_game() {
        let mut s = session(BoardConfig::classic(), "12345");
        let before = s.teams().to_vec();
        assert!(s.apply(Action::SetSeed(String::new())).is_err());
        assert_eq!(s.seed().unwrap().as_str(), "12345");
        assert_eq!(s.teams(), before.as_slice());
    }

    #[test]
    fn test_construction_fails_fast() {
        assert!(matches!(
            Session::new(BoardConfig::classic(), numbered_vocab(3)),
            Err(SessionError::Config(ConfigError::VocabularyTooSmall { .. }))
        ));

        let mut config = BoardConfig::player();
        config.code_length = 6;
        assert!(matches!(
            Session::new(config, numbered_vocab(10)),
            Err(SessionError::Config(ConfigError::DistinctTooLong { .. }))
        ));

        // Clue digits must fit a byte
        let mut config = BoardConfig::classic();
        config.code_base = 300;
        assert!(matches!(
            Session::new(config, numbered_vocab(300)),
            Err(SessionError::Config(ConfigError::CodeBaseTooLarge(300)))
        ));
    }

    #[test]
    fn test_custom_teams() {
        let config = BoardConfig {
            teams: TeamNaming::Custom(vec!["owls".into(), "foxes".into(), "bats".into()]),
            messages: Some(MessagePolicy::Distinct),
            ..BoardConfig::classic()
        };
        let s = Session::with_seed(config, numbered_vocab(20), Seed::parse("12345").unwrap()).unwrap();
        assert_eq!(s.teams().len(), 3);
        assert_eq!(s.teams()[0].words.words(), &["w6", "w19", "w0", "w13"]);
        assert_eq!(s.teams()[1].words.words(), &["w6", "w7", "w17", "w5"]);
        assert_eq!(s.teams()[2].words.len(), 4);
    }

    #[test]
    fn test_share_link() {
        let s = session(BoardConfig::classic(), "12345");
        assert_eq!(s.share_link().unwrap(), "decrypto.vercel.app/player?12345");
        assert_eq!(s.share_url().unwrap(), "https://decrypto.vercel.app/player?12345");
        let empty = Session::new(BoardConfig::classic(), Vocabulary::builtin()).unwrap();
        assert!(empty.share_link().is_none());
        assert!(empty.share_url().is_none());
        assert!(empty.teams().is_empty());
        assert!(!empty.is_visible(0));
    }
}
