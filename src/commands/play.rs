//! Interactive play mode
//!
//! Line-oriented game loop over one puzzle: words are validated as typed,
//! `:`-prefixed input drives everything else.

use super::CommandError;
use crate::core::{TriviaClue, ValidationOutcome};
use crate::dictionary::Lookup;
use crate::output::{
    print_banner, print_clues, print_final_result, print_hive, print_outcome, print_progress,
    print_stats, print_words,
};
use crate::progress::ProgressEvent;
use crate::storage::{KeyValueStore, PlayStats};
use crate::validator::{Submission, WordValidator};
use colored::Colorize;
use rand::seq::SliceRandom;
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tracing::warn;

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    Guess(String),
    Shuffle,
    Words,
    Clues,
    Final,
    Stats,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// Parse one input line
#[must_use]
pub fn parse_command(line: &str) -> PlayCommand {
    let line = line.trim();
    if line.is_empty() {
        return PlayCommand::Empty;
    }
    let Some(command) = line.strip_prefix(':') else {
        return PlayCommand::Guess(line.to_string());
    };

    match command.trim().to_lowercase().as_str() {
        "shuffle" | "s" => PlayCommand::Shuffle,
        "words" | "w" => PlayCommand::Words,
        "clues" | "c" => PlayCommand::Clues,
        "final" | "f" => PlayCommand::Final,
        "stats" => PlayCommand::Stats,
        "help" | "h" | "?" => PlayCommand::Help,
        "quit" | "q" | "exit" => PlayCommand::Quit,
        other => PlayCommand::Unknown(other.to_string()),
    }
}

/// Run the game loop on stdin
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub async fn run_play<L: Lookup>(
    validator: &WordValidator<L>,
    store: &dyn KeyValueStore,
) -> Result<PlayStats, CommandError> {
    let lines = BufReader::new(tokio::io::stdin()).lines();
    play_lines(validator, store, lines).await
}

/// Game loop over any line source; returns the updated lifetime stats
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub async fn play_lines<L, R>(
    validator: &WordValidator<L>,
    store: &dyn KeyValueStore,
    mut lines: Lines<R>,
) -> Result<PlayStats, CommandError>
where
    L: Lookup,
    R: AsyncBufRead + Unpin,
{
    let puzzle = validator.puzzle();
    let mut outer = puzzle.outer_letters().to_vec();

    let mut stats = PlayStats::load(store).unwrap_or_else(|e| {
        warn!(error = %e, "could not load play stats, starting fresh");
        PlayStats::default()
    });
    stats.games_played += 1;
    persist(&stats, store);

    print_banner(&puzzle);
    print_hive(puzzle.center_letter(), &outer);
    println!();

    loop {
        prompt("Word")?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_command(&line) {
            PlayCommand::Empty => {}
            PlayCommand::Guess(word) => {
                let Submission { outcome, events } = validator.submit(&word).await;
                print_outcome(&outcome);

                if let ValidationOutcome::Accepted { pangram, .. } = outcome {
                    stats.words_found += 1;
                    if pangram {
                        stats.pangrams_found += 1;
                    }

                    let found = validator.accepted_words().len();
                    print_progress(found, puzzle.total_words(), validator.progress());
                    announce(&events, puzzle.clues());

                    if found == puzzle.total_words() {
                        stats.puzzles_completed += 1;
                        println!("\n  {}", "🎉 Every word found!".bright_green().bold());
                    }
                    persist(&stats, store);
                }
            }
            PlayCommand::Shuffle => {
                outer.shuffle(&mut rand::rng());
                print_hive(puzzle.center_letter(), &outer);
            }
            PlayCommand::Words => print_words(&validator.accepted_words()),
            PlayCommand::Clues => print_clues(&validator.unlocked_clues(), puzzle.clues().len()),
            PlayCommand::Final => {
                let Some(challenge) = validator.final_challenge() else {
                    println!("  The final challenge is not open.");
                    continue;
                };
                println!("\n  {}", challenge.question.bright_white().bold());
                prompt("Answer")?;
                let Some(answer) = lines.next_line().await? else {
                    break;
                };
                if let Some(correct) = validator.complete_final_challenge(&answer) {
                    print_final_result(correct, &challenge.answer);
                    if correct {
                        stats.final_challenges_won += 1;
                        persist(&stats, store);
                    }
                }
            }
            PlayCommand::Stats => print_stats(&stats),
            PlayCommand::Help => {
                println!("  :shuffle  :words  :clues  :final  :stats  :quit");
            }
            PlayCommand::Quit => break,
            PlayCommand::Unknown(command) => println!("  Unknown command ':{command}'"),
        }
    }

    validator.cancel_pending();
    persist(&stats, store);
    println!("\n👋 Thanks for playing!\n");
    Ok(stats)
}

/// Print newly unlocked clues and the final-challenge notice
fn announce(events: &[ProgressEvent], clues: &[TriviaClue]) {
    for event in events {
        match *event {
            ProgressEvent::ClueUnlocked { index } => {
                if let Some(clue) = clues.get(index) {
                    println!(
                        "  {} {}",
                        format!("🔓 Clue {}:", index + 1).bright_cyan().bold(),
                        clue.text
                    );
                }
            }
            ProgressEvent::FinalChallengeAvailable => {
                println!(
                    "  {}",
                    "🏁 Final challenge unlocked! Type :final".bright_yellow().bold()
                );
            }
        }
    }
}

fn persist(stats: &PlayStats, store: &dyn KeyValueStore) {
    if let Err(e) = stats.save(store) {
        warn!(error = %e, "could not save play stats");
    }
}

fn prompt(label: &str) -> io::Result<()> {
    print!("{label}: ");
    io::stdout().flush()
}
