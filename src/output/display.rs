//! Display functions for the game loop and command results

use super::formatters::{check_status, create_progress_bar, hive_line, outcome_text, progress_label};
use crate::commands::CheckReport;
use crate::core::{PuzzleDefinition, TriviaClue, ValidationOutcome};
use crate::storage::PlayStats;
use colored::Colorize;

/// Print the opening banner and how to play
pub fn print_banner(puzzle: &PuzzleDefinition) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "  {}  {}",
        "WORD HIVE".bright_yellow().bold(),
        puzzle.id().bright_white()
    );
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\nMake words of 4+ letters that use the center letter {}.",
        puzzle
            .center_letter()
            .to_ascii_uppercase()
            .to_string()
            .bright_yellow()
            .bold()
    );
    println!("Commands: :shuffle  :words  :clues  :final  :stats  :quit\n");
}

/// Print the hive with the center letter highlighted
pub fn print_hive(center: char, outer: &[char]) {
    let line = hive_line(center, outer);
    let center_text = format!("[{}]", center.to_ascii_uppercase());
    let highlighted = line.replace(&center_text, &center_text.bright_yellow().bold().to_string());
    println!("  {highlighted}");
}

/// Print a validation result; superseded results print nothing
pub fn print_outcome(outcome: &ValidationOutcome) {
    let text = outcome_text(outcome);
    match outcome {
        ValidationOutcome::Accepted { pangram: true, .. } => {
            println!("  ✨ {}", text.bright_magenta().bold());
        }
        ValidationOutcome::Accepted { .. } => println!("  ✓ {}", text.green().bold()),
        ValidationOutcome::Rejected(_) => println!("  ✗ {}", text.red()),
        ValidationOutcome::Errored(_) => println!("  ⚠ {}", text.yellow()),
        ValidationOutcome::Superseded => {}
    }
}

/// Print the progress bar line
pub fn print_progress(found: usize, total: usize, progress: f64) {
    println!(
        "  {} {}",
        create_progress_bar(progress, 1.0, 30).cyan(),
        progress_label(found, total, progress).bright_white()
    );
}

/// Print found words in discovery order
pub fn print_words(words: &[String]) {
    if words.is_empty() {
        println!("  No words yet.");
        return;
    }
    println!("\n  {} ({})", "Found words".bright_cyan().bold(), words.len());
    for chunk in words.chunks(6) {
        let line: Vec<String> = chunk.iter().map(|w| w.to_uppercase()).collect();
        println!("    {}", line.join("  "));
    }
    println!();
}

/// Print unlocked clues, with a count of those still locked
pub fn print_clues(unlocked: &[TriviaClue], total: usize) {
    println!("\n  {}", "Trivia clues".bright_cyan().bold());
    if unlocked.is_empty() {
        println!("    Keep finding words to unlock clues.");
    }
    for (i, clue) in unlocked.iter().enumerate() {
        println!("    {}. {}", (i + 1).to_string().bright_black(), clue.text);
    }
    let locked = total.saturating_sub(unlocked.len());
    if locked > 0 {
        println!("    {}", format!("{locked} more locked").bright_black());
    }
    println!();
}

/// Print the final challenge verdict
pub fn print_final_result(correct: bool, answer: &str) {
    if correct {
        println!(
            "\n  {}",
            format!("🏆 Correct! The answer was {answer}.")
                .bright_green()
                .bold()
        );
    } else {
        println!("\n  {}", format!("The answer was {answer}.").yellow());
    }
}

/// Print lifetime play stats
pub fn print_stats(stats: &PlayStats) {
    println!("\n  {}", "Your stats".bright_cyan().bold());
    println!("    Games played:       {}", stats.games_played);
    println!("    Words found:        {}", stats.words_found);
    println!("    Pangrams:           {}", stats.pangrams_found);
    println!("    Puzzles completed:  {}", stats.puzzles_completed);
    println!("    Final challenges:   {}", stats.final_challenges_won);
    println!();
}

/// Print the puzzle catalogue
pub fn print_puzzle_list(puzzles: &[PuzzleDefinition]) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {}", "Puzzles".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());
    for puzzle in puzzles {
        println!(
            "  {:<16} {}  {} words, {} clues",
            puzzle.id().bright_white().bold(),
            hive_line(puzzle.center_letter(), puzzle.outer_letters()),
            puzzle.total_words(),
            puzzle.clues().len()
        );
    }
    println!();
}

/// Print per-word dictionary results and totals
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "─".repeat(60).cyan());
    for (word, result) in &report.results {
        let status = check_status(*result);
        let status = match result {
            Ok(true) => status.green().bold(),
            Ok(false) => status.red(),
            Err(_) => status.yellow(),
        };
        println!("  {:<20} {status}", word.to_uppercase());
    }
    println!("{}", "─".repeat(60).cyan());
    println!(
        "  {} valid, {} invalid, {} errors in {:.2?}",
        report.valid_count().to_string().green(),
        report.invalid_count().to_string().red(),
        report.error_count().to_string().yellow(),
        report.elapsed
    );
}
