//! Display functions for command results

use super::formatters::{create_progress_bar, score_bar, score_verdict};
use crate::commands::{CheckReport, SimulationResult};
use crate::interactive::Statistics;
use colored::Colorize;

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult, max_score: u64) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Scores:".bright_cyan().bold());
    println!("   Sessions:         {}", result.total_sessions);
    println!(
        "   Average score:    {}",
        format!("{:.1}", result.average_score)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Average bar:      [{}]",
        create_progress_bar(result.average_score, max_score as f64, 30).green()
    );
    println!(
        "   Best session:     {}",
        format!("{}", result.max_score).green()
    );
    println!(
        "   Worst session:    {}",
        format!("{}", result.min_score).yellow()
    );
    println!("   Perfect sessions: {}", result.perfect_sessions);

    println!("\n🎯 {}", "Rounds:".bright_cyan().bold());
    println!("   Solved:           {}", result.total_correct);
    println!("   Skipped:          {}", result.total_skipped);
    println!("   Wrong guesses:    {}", result.total_wrong);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Sessions/second:  {:.1}", result.sessions_per_second);

    if result.total_sessions == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&score, &count) in &result.distribution {
        let pct = (count as f64 / result.total_sessions as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {score:4}: {bar} {count:5} ({pct:5.1}%)");
    }
}

/// Print a word pool check report
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD LIST CHECK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Words:            {}", report.total_words);
    println!("   Distinct words:   {}", report.distinct_words);
    println!("   Session length:   {}", report.max_words);
    println!("   Average length:   {:.1}", report.average_length);
    if let (Some(shortest), Some(longest)) = (&report.shortest, &report.longest) {
        println!(
            "   Shortest/longest: {} / {}",
            shortest.to_uppercase(),
            longest.to_uppercase()
        );
    }

    if !report.unscramblable.is_empty() {
        println!(
            "\n   {} {}",
            "Cannot be scrambled:".yellow(),
            report.unscramblable.join(", ")
        );
    }

    println!();
    match &report.problem {
        None => println!("{}", "✅ Word list is playable".green().bold()),
        Some(problem) => println!("{}", format!("❌ {problem}").red().bold()),
    }
}

/// Print totals after leaving the TUI
pub fn print_play_summary(stats: &Statistics, max_score: u64) {
    if stats.games_played == 0 {
        println!("\n👋 Thanks for playing!\n");
        return;
    }

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Games played: {}  |  Words solved: {}  |  Skipped: {}",
        stats.games_played, stats.words_solved, stats.words_skipped
    );
    println!(
        "Best score:   {} [{}] {}",
        stats.best_score.to_string().bright_yellow().bold(),
        score_bar(stats.best_score, max_score, 20).green(),
        score_verdict(stats.best_score, max_score)
    );
    println!("Average:      {:.1}", stats.average_score());
    println!("{}", "─".repeat(60).cyan());
    println!("\n👋 Thanks for playing!\n");
}
