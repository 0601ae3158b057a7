//! Word Hive - CLI
//!
//! Letter-hive word puzzle in the terminal, backed by a remote dictionary.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use word_hive::{
    commands::{check_progress_bar, run_check, run_play},
    config::Config,
    core::PuzzleDefinition,
    dictionary::{
        CancellationToken, DictionaryCache, DictionaryClient, HttpLookup, Lookup, WordListLookup,
    },
    output::{print_check_report, print_puzzle_list},
    puzzles,
    storage::JsonFileStore,
    validator::WordValidator,
};

#[derive(Parser)]
#[command(
    name = "word_hive",
    about = "Letter-hive word puzzle with dictionary validation and trivia unlocks",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML config file (defaults apply to anything it leaves out)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Puzzle id from the catalogue (default: the first one)
    #[arg(short, long, global = true)]
    puzzle: Option<String>,

    /// Load the catalogue from a TOML or JSON file instead of the built-in one
    #[arg(long, global = true)]
    puzzle_file: Option<PathBuf>,

    /// Check words against the puzzle's word list instead of the online dictionary
    #[arg(long, global = true)]
    offline: bool,

    /// Where play stats are kept
    #[arg(long, global = true)]
    stats_file: Option<PathBuf>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a puzzle (default)
    Play,

    /// Look words up in the dictionary, ignoring puzzle rules
    Check {
        /// Words to look up
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// List available puzzles
    Puzzles,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "word_hive=info",
        1 => "word_hive=debug",
        _ => "word_hive=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn default_stats_path() -> PathBuf {
    std::env::var_os("HOME").map_or_else(
        || PathBuf::from("word_hive_stats.json"),
        |home| PathBuf::from(home).join(".word_hive").join("stats.json"),
    )
}

/// Load the catalogue based on `--puzzle-file`
fn load_catalogue(puzzle_file: Option<&PathBuf>) -> Result<Vec<PuzzleDefinition>> {
    match puzzle_file {
        Some(path) => puzzles::load_from_file(path)
            .with_context(|| format!("loading puzzles from {}", path.display())),
        None => puzzles::embedded().context("loading built-in puzzles"),
    }
}

fn select_puzzle(catalogue: &[PuzzleDefinition], id: Option<&str>) -> Result<PuzzleDefinition> {
    match id {
        Some(id) => match puzzles::find(catalogue, id) {
            Some(puzzle) => Ok(puzzle.clone()),
            None => bail!("no puzzle named '{id}' (try the `puzzles` command)"),
        },
        None => catalogue
            .first()
            .cloned()
            .context("puzzle catalogue is empty"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };

    let catalogue = load_catalogue(cli.puzzle_file.as_ref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    if matches!(command, Commands::Puzzles) {
        print_puzzle_list(&catalogue);
        return Ok(());
    }

    let puzzle = select_puzzle(&catalogue, cli.puzzle.as_deref())?;
    let stats_path = cli.stats_file.unwrap_or_else(default_stats_path);

    if cli.offline {
        info!(puzzle = puzzle.id(), "offline mode: using the puzzle word list");
        let lookup = WordListLookup::new(puzzle.words().to_vec());
        run_command(command, lookup, &config, puzzle, stats_path).await
    } else {
        let lookup = HttpLookup::new(config.dictionary.base_url.clone());
        run_command(command, lookup, &config, puzzle, stats_path).await
    }
}

async fn run_command<L: Lookup>(
    command: Commands,
    lookup: L,
    config: &Config,
    puzzle: PuzzleDefinition,
    stats_path: PathBuf,
) -> Result<()> {
    let cache = DictionaryCache::with_capacity(config.cache.capacity).shared();
    let client = DictionaryClient::with_policy(lookup, cache, config.dictionary.retry_policy());

    match command {
        Commands::Play => {
            let validator = WordValidator::new(puzzle, client)
                .with_rules((&config.rules).into())
                .with_thresholds((&config.progress).into());
            let store = JsonFileStore::new(stats_path);
            run_play(&validator, &store).await?;
        }
        Commands::Check { words } => {
            let pb = check_progress_bar(words.len());
            let report = run_check(&client, &words, &CancellationToken::new(), &pb).await;
            print_check_report(&report);
        }
        Commands::Puzzles => {}
    }
    Ok(())
}
