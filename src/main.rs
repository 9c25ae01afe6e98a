//! Decrypto Board
//!
//! Command line board for Decrypto-style games. Every player runs it with the
//! same seed and gets the same trays; nothing is sent anywhere.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use decrypto::{
    VERSION,
    game::{
        action::{Action, ActionParseError},
        config::BoardConfig,
        events::SessionEvent,
        state::Session,
        vocabulary::Vocabulary,
    },
    share::{link::resolve_seed, snapshot::SessionSnapshot},
    Seed,
};

/// Board presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Variant {
    /// Red and blue teams, repeating digits, pick your own team.
    Classic,
    /// Host display: scoreboard and one reveal for all trays.
    Board,
    /// Player view: distinct digits, pick your own team.
    Player,
}

impl Variant {
    fn config(self) -> BoardConfig {
        match self {
            Variant::Classic => BoardConfig::classic(),
            Variant::Board => BoardConfig::board(),
            Variant::Player => BoardConfig::player(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "decrypto-board", version, about = "Deterministic Decrypto word trays and clue messages")]
struct Cli {
    /// Board preset.
    #[arg(long, value_enum, default_value_t = Variant::Classic)]
    variant: Variant,

    /// JSON board config; overrides --variant.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Word list file, one word per line.
    #[arg(long)]
    words: Option<PathBuf>,

    /// Print JSON snapshots instead of text.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start a new game from the clock.
    New {
        /// Show every tray.
        #[arg(long)]
        reveal: bool,
    },
    /// Rebuild a game from a seed or share link.
    Join {
        /// Seed or share link.
        seed: String,
        /// Show this team's tray.
        #[arg(long)]
        team: Option<String>,
        /// Show every tray.
        #[arg(long)]
        reveal: bool,
    },
    /// Print consecutive messages for a team.
    Message {
        /// Seed or share link.
        seed: String,
        /// Team receiving the messages.
        #[arg(long)]
        team: String,
        /// Number of messages.
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Interactive session reading commands from stdin.
    Play {
        /// Seed or share link to start with.
        seed: Option<String>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    let cli = Cli::parse();
    debug!("Decrypto Board v{}", VERSION);

    let config = match &cli.config {
        Some(path) => BoardConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => cli.variant.config(),
    };
    let vocabulary = match &cli.words {
        Some(path) => Vocabulary::from_path(path)
            .with_context(|| format!("loading word list {}", path.display()))?,
        None => Vocabulary::builtin(),
    };
    info!("Vocabulary: {} words", vocabulary.len());

    let mut session = Session::new(config, vocabulary)?;

    match cli.command {
        Command::New { reveal } => {
            session.start(Seed::generate_now())?;
            print_board(&session, reveal, cli.json)?;
        }
        Command::Join { seed, team, reveal } => {
            session.start(resolve_seed(&seed)?)?;
            if let Some(team) = team {
                session.apply(Action::SelectTeam(team))?;
            }
            print_board(&session, reveal, cli.json)?;
        }
        Command::Message { seed, team, count } => {
            session.start(resolve_seed(&seed)?)?;
            for _ in 0..count {
                let event = session.apply(Action::GenerateMessage(team.clone()))?;
                print_event(&event, cli.json)?;
            }
        }
        Command::Play { seed } => {
            if let Some(seed) = seed {
                session.start(resolve_seed(&seed)?)?;
            }
            play(&mut session, cli.json)?;
        }
    }

    Ok(())
}

/// Read commands until `quit` or end of input.
fn play(session: &mut Session, json: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if session.has_game() {
        print_board(session, false, json)?;
    } else {
        println!("No game yet. Type `new` or `seed <seed>`, `help` for commands.");
    }

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim().to_lowercase().as_str() {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                print_help();
                continue;
            }
            "show" => {
                print_board(session, false, json)?;
                continue;
            }
            _ => {}
        }

        let now_ms = chrono::Utc::now().timestamp_millis();
        let action = match Action::parse(&line, now_ms) {
            Ok(action) => action,
            Err(ActionParseError::Empty) => continue,
            Err(e) => {
                eprintln!("error: {e}");
                continue;
            }
        };

        match session.apply(action) {
            Ok(event @ (SessionEvent::GameStarted { .. }
            | SessionEvent::TeamSelected { .. }
            | SessionEvent::TraysRevealed)) => {
                print_event(&event, json)?;
                print_board(session, false, json)?;
            }
            Ok(event) => print_event(&event, json)?,
            Err(e) => eprintln!("error: {e}"),
        }
    }

    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  new                 start a new game");
    println!("  seed <seed|link>    join a game");
    println!("  team <team>         play for a team (shows its tray)");
    println!("  reveal              show every tray");
    println!("  message <team>      draw a message for a team");
    println!("  miss <team>         record a miss/strike");
    println!("  intercept <team>    record an interception");
    println!("  show                print the board");
    println!("  quit                leave");
}

fn print_event(event: &SessionEvent, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(event)?);
        return Ok(());
    }

    match event {
        SessionEvent::GameStarted { seed, check_code } => {
            println!("Game {seed} (check code {check_code})");
        }
        SessionEvent::TeamSelected { team } => println!("You are on team {}", capitalize(team)),
        SessionEvent::TraysRevealed => println!("All trays revealed"),
        SessionEvent::MessageGenerated { team, message } => {
            println!("{} message to send: {message}", capitalize(team));
        }
        SessionEvent::MissRecorded { team, misses, .. } => {
            println!("{}: {misses} missed", capitalize(team));
        }
        SessionEvent::InterceptionRecorded { team, interceptions, .. } => {
            println!("{}: {interceptions} intercepted", capitalize(team));
        }
    }
    Ok(())
}

fn print_board(session: &Session, reveal_all: bool, json: bool) -> Result<()> {
    let mut snapshot = SessionSnapshot::capture(session);
    if reveal_all {
        snapshot = snapshot.with_all_words(session);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    let Some(seed) = &snapshot.seed else {
        println!("No game in progress");
        return Ok(());
    };
    println!("Game ID: {seed}");
    if let Some(url) = session.share_url() {
        println!("Share:   {url}");
    }
    if let Some(code) = &snapshot.check_code {
        println!("Check:   {code}");
    }

    for team in &snapshot.teams {
        println!();
        let mut flags = String::new();
        if team.losing {
            flags.push_str(" [losing]");
        }
        if team.winning {
            flags.push_str(" [winning]");
        }
        println!(
            "Team {}  {}: {}  Interceptions: {}{}",
            capitalize(&team.name),
            snapshot.miss_label,
            team.misses,
            team.interceptions,
            flags
        );
        for slot in 0..session.config().code_base as usize {
            let word = team
                .words
                .as_ref()
                .and_then(|w| w.get(slot))
                .map(String::as_str)
                .unwrap_or("-----");
            println!("  {}. {}", slot + 1, word);
        }
        if let Some(message) = &team.message {
            println!("  Message: {message}");
        }
    }
    Ok(())
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
