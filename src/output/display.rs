//! Display functions for command results

use super::formatters::{colorize_guess, create_progress_bar};
use crate::commands::{ExploreResult, SearchReport};
use crate::core::{Verdict, Word};
use colored::Colorize;

/// Print a scored guess
pub fn print_score(guess: &Word, secret: &Word, verdict: &Verdict) {
    println!(
        "\n{} vs {}",
        guess.text().to_uppercase().bright_white().bold(),
        secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("  Feedback: {}", colorize_guess(guess, verdict));
    println!("  Verdict:  {verdict} {}", verdict.to_emoji());
    println!(
        "  Greens: {}  Yellows: {}",
        verdict.count_greens(),
        verdict.count_yellows()
    );
}

/// Print the words left after filtering
pub fn print_filter_result(guess: &Word, verdict: &Verdict, pool_size: usize, remaining: &[Word]) {
    println!(
        "\n{} {} {}",
        "Filtering with".bright_cyan(),
        colorize_guess(guess, verdict),
        verdict.to_emoji()
    );
    println!("  Candidates: {pool_size} → {}", remaining.len());

    for word in remaining {
        println!("  • {}", word.text().to_uppercase());
    }
}

/// Print the result of a single priority search
pub fn print_search_report(report: &SearchReport) {
    let outcome = &report.outcome;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Searching for: {} ({:?} expansion, {} words)",
        report.target.text().to_uppercase().bright_yellow().bold(),
        report.expansion,
        report.pool_size
    );
    println!("{}", "─".repeat(60).cyan());

    if let Some(start) = &outcome.start {
        println!("  Start word:    {}", start.text().to_uppercase());
    }
    println!("  Expanded:      {}", outcome.expanded);
    println!("  Generated:     {}", outcome.generated);
    println!("  Stale pops:    {}", outcome.stale);
    println!("  Peak frontier: {}", outcome.peak_frontier);
    println!("  Time taken:    {:.3}ms", report.duration.as_secs_f64() * 1000.0);

    println!();
    match (&outcome.found, outcome.depth) {
        (Some(word), Some(depth)) => println!(
            "{}",
            format!("✅ Found {} at depth {depth}", word.text().to_uppercase())
                .green()
                .bold()
        ),
        _ => println!(
            "{}",
            format!("❌ {} is not reachable", report.target.text().to_uppercase())
                .red()
                .bold()
        ),
    }
}

/// Print aggregated explore statistics
pub fn print_explore_result(result: &ExploreResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({:?} expansion)",
        "SEARCH EXPLORATION".bright_cyan().bold(),
        result.expansion
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Results:".bright_cyan().bold());
    println!("   Targets:           {}", result.total_words);
    println!("   Found:             {}", format!("{}", result.found).green());
    println!(
        "   Missed:            {}",
        format!("{}", result.missed.len()).red()
    );
    println!(
        "   Avg expansions:    {}",
        format!("{:.2}", result.average_expanded).bright_yellow().bold()
    );
    println!("   Max expansions:    {}", result.max_expanded);
    println!("   Avg nodes created: {:.1}", result.average_generated);
    println!("   Time taken:        {:.2}s", result.duration.as_secs_f64());
    println!("   Searches/second:   {:.1}", result.searches_per_second);

    if !result.missed.is_empty() {
        let missed: Vec<&str> = result.missed.iter().map(Word::text).collect();
        println!("   Not reached:       {}", missed.join(", "));
    }

    if result.depth_distribution.is_empty() {
        return;
    }

    println!("\n📈 {}", "Depth of match:".bright_cyan().bold());
    for (depth, &count) in &result.depth_distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {depth:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
