//! Chat Wordle - CLI
//!
//! Play the group-chat game from a terminal, inspect how guesses are read,
//! and score guesses by hand.

use anyhow::{Context, Result};
use chat_wordle::{
    commands::{
        ConsoleOutbound, OpenDirectory, parse_guess_report, print_check_statistics, run_check,
        run_play, score_guess,
    },
    config::GameConfig,
    dictionary::{
        Dictionary, GUESSES,
        loader::{load_glyphs, load_words},
    },
    game::{GameService, Games, JsonFileStore, MemoryStore, SettingsStore, SystemClock},
    interpret::Interpreter,
    output::{print_feedback_result, print_parse_report},
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "chat_wordle",
    about = "Group-chat Wordle with emoji-aware guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Game configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level for this crate; RUST_LOG overrides it
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Solution word list (one word per line)
    #[arg(long, global = true)]
    solutions: Option<PathBuf>,

    /// Extra acceptable guesses (one word per line)
    #[arg(long, global = true)]
    guesses: Option<PathBuf>,

    /// Letter glyph table (78 lines)
    #[arg(long, global = true)]
    glyphs: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a chat channel on stdin (default)
    Play {
        /// Keep enabled channels in this JSON file across runs
        #[arg(short, long)]
        state: Option<PathBuf>,

        /// Disable the minimum time between guesses
        #[arg(short, long)]
        fast: bool,
    },

    /// Show how a guess is segmented and resolved
    Parse {
        /// The raw guess, as typed after "guess"
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// List every reading of every unit
        #[arg(short, long)]
        verbose: bool,
    },

    /// Score a guess against a solution
    Feedback {
        /// The guessed word
        guess: String,

        /// The solution word
        solution: String,
    },

    /// Check that every acceptable guess resolves to itself
    Check {
        /// Limit number of words to check
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("chat_wordle={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Build the interpreter, swapping in any word lists given on the command line
fn load_interpreter(cli: &Cli) -> Result<Interpreter> {
    let interpreter = Interpreter::shared();
    if cli.solutions.is_none() && cli.guesses.is_none() && cli.glyphs.is_none() {
        return Ok(interpreter);
    }

    let embedded = Dictionary::shared();
    let solutions = match &cli.solutions {
        Some(path) => load_words(path).context("loading solutions")?,
        None => embedded.solutions().to_vec(),
    };
    let guesses: Vec<String> = match &cli.guesses {
        Some(path) => load_words(path)
            .context("loading guesses")?
            .iter()
            .map(|w| w.text().to_string())
            .collect(),
        None => GUESSES.iter().map(|&w| w.to_string()).collect(),
    };
    let glyphs = match &cli.glyphs {
        Some(path) => load_glyphs(path).context("loading glyphs")?,
        None => embedded.glyphs().clone(),
    };

    let dictionary = Dictionary::new(solutions, guesses, glyphs)?;
    info!(
        solutions = dictionary.solutions().len(),
        acceptable = dictionary.acceptable_count(),
        "loaded custom dictionary"
    );
    Ok(interpreter.with_dictionary(Arc::new(dictionary)))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let interpreter = load_interpreter(&cli)?;

    match cli.command.unwrap_or(Commands::Play {
        state: None,
        fast: false,
    }) {
        Commands::Play { state, fast } => {
            run_play_command(cli.config.as_deref(), state, fast, interpreter).await
        }
        Commands::Parse { text, verbose } => {
            let report = parse_guess_report(&text.join(" "), &interpreter);
            print_parse_report(&report, verbose);
            Ok(())
        }
        Commands::Feedback { guess, solution } => {
            let result = score_guess(&guess, &solution, interpreter.dictionary())?;
            print_feedback_result(&result);
            Ok(())
        }
        Commands::Check { limit } => {
            let stats = run_check(&interpreter, limit);
            print_check_statistics(&stats);
            Ok(())
        }
    }
}

async fn run_play_command(
    config: Option<&Path>,
    state: Option<PathBuf>,
    fast: bool,
    interpreter: Interpreter,
) -> Result<()> {
    let mut config = GameConfig::load(config)?;
    if fast {
        config.min_guess_interval_ms = 0;
    }

    let store: Arc<dyn SettingsStore> = match state {
        Some(path) => Arc::new(JsonFileStore::new(path)),
        None => Arc::new(MemoryStore::new()),
    };
    let games = Games::new(config, interpreter, Arc::new(SystemClock))?;
    let service = GameService::new(
        games,
        store,
        Arc::new(ConsoleOutbound),
        Arc::new(OpenDirectory),
    );

    run_play(&service).await.context("reading chat input")
}
