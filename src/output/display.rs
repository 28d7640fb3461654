//! Display functions for command results

use super::formatters::{readings_list, tile_row, unit_label};
use crate::commands::{FeedbackResult, ParseReport};
use crate::game::ChannelId;
use colored::Colorize;

/// Print how a guess was interpreted
pub fn print_parse_report(report: &ParseReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Guess: {}", report.raw.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    let max = if verbose { usize::MAX } else { 8 };
    for (i, unit) in report.units.iter().enumerate() {
        println!(
            "\n{} {} {}",
            format!("Unit {}:", i + 1).bold(),
            unit.source,
            format!("[{}]", unit_label(&unit.unit)).bright_black()
        );
        println!("  Readings: {}", readings_list(&unit.readings, max));
    }

    println!();
    match &report.result {
        Ok(word) => {
            println!(
                "{} {}",
                "✅ Resolves to".green().bold(),
                word.text().to_uppercase().bright_yellow().bold()
            );
            if let Some(cost) = report.cost {
                println!("  Cost: {cost:.2}");
            }
        }
        Err(e) => println!("{}", format!("❌ {e}").red().bold()),
    }
}

/// Print a scored guess
pub fn print_feedback_result(result: &FeedbackResult) {
    println!(
        "\n{} vs {}",
        result.guess.text().to_uppercase().bright_yellow().bold(),
        result.solution.text().to_uppercase().bold()
    );
    println!("\n  {}", tile_row(&result.guess, result.feedback));
    println!("  {}", result.feedback.to_emoji());
    println!("\n  Board: {}", result.glyph_row.bright_black());
    if !result.acceptable {
        println!(
            "\n{}",
            "⚠️  Not in the guess list; a game would reject it".yellow()
        );
    }
}

/// Print a message the bot posted
pub fn print_bot_reply(channel: ChannelId, text: &str) {
    println!("{} {}", format!("[#{channel}] bot:").bright_cyan().bold(), text);
}
