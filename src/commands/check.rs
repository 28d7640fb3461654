//! Dictionary round-trip check
//!
//! Every acceptable guess typed as plain text must resolve to itself. Runs the
//! whole dictionary through the interpreter in parallel and reports failures.

use crate::interpret::{GuessError, Interpreter};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// A word that did not resolve to itself
#[derive(Debug, Clone, PartialEq)]
pub struct CheckFailure {
    pub word: String,
    pub result: Result<String, GuessError>,
}

/// Statistics from checking the dictionary
#[derive(Debug)]
pub struct CheckStatistics {
    pub total_words: usize,
    pub passed: usize,
    pub failures: Vec<CheckFailure>,
    pub total_time: Duration,
}

/// Resolve every acceptable guess (or the first `limit` in sorted order)
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
#[must_use]
pub fn run_check(interpreter: &Interpreter, limit: Option<usize>) -> CheckStatistics {
    let dictionary = interpreter.dictionary();
    let words: Vec<&str> = dictionary
        .acceptable_sorted()
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    println!("🔎 Checking {} words...", words.len());

    let pb = ProgressBar::new(words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("valid progress template")
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut failures: Vec<CheckFailure> = words
        .par_iter()
        .filter_map(|&word| {
            let result = interpreter.parse_guess(word);
            pb.inc(1);
            match result {
                Ok(resolved) if resolved.text() == word => None,
                other => Some(CheckFailure {
                    word: word.to_string(),
                    result: other.map(|w| w.text().to_string()),
                }),
            }
        })
        .collect();
    failures.sort_by(|a, b| a.word.cmp(&b.word));

    pb.finish_with_message("Complete!");

    CheckStatistics {
        total_words: words.len(),
        passed: words.len() - failures.len(),
        failures,
        total_time: start.elapsed(),
    }
}

/// Print check statistics
pub fn print_check_statistics(stats: &CheckStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Round-trip Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall".bright_cyan().bold());
    println!("  Words checked:  {}", stats.total_words);
    let share = if stats.total_words > 0 {
        stats.passed as f64 / stats.total_words as f64 * 100.0
    } else {
        100.0
    };
    println!(
        "  Round-tripped:  {} {}",
        stats.passed,
        format!("({share:.1}%)").green()
    );
    println!(
        "  Total time:     {:.2}s",
        stats.total_time.as_secs_f64()
    );

    if stats.failures.is_empty() {
        println!("\n{}", "✅ Every word resolves to itself".green().bold());
        return;
    }

    println!("\n😰 {}", "Failures".yellow().bold());
    for failure in stats.failures.iter().take(20) {
        let got = match &failure.result {
            Ok(word) => word.clone(),
            Err(e) => e.to_string(),
        };
        println!("  {} → {}", failure.word.to_uppercase().yellow(), got.red());
    }
    if stats.failures.len() > 20 {
        println!("  ... and {} more", stats.failures.len() - 20);
    }
}
