//! Display functions for command results

use super::formatters::{create_progress_bar, describe_step};
use crate::commands::{BenchmarkResult, NeighborsResult, SolveResult};
use crate::ladder::ARROW;
use colored::Colorize;

/// Print the result of solving a ladder
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        result.start.text().to_uppercase().bright_yellow().bold(),
        result.goal.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if let Some(ladder) = &result.ladder {
        let rungs: Vec<String> = ladder
            .words()
            .iter()
            .map(|w| w.text().bright_white().bold().to_string())
            .collect();
        let arrow = ARROW.bright_black().to_string();
        println!("\n{}", rungs.join(arrow.as_str()));

        if verbose {
            println!();
            for (i, pair) in ladder.words().windows(2).enumerate() {
                let change = describe_step(&pair[0], &pair[1]).unwrap_or_default();
                println!(
                    "  {}. {} → {}  ({})",
                    (i + 1).to_string().bright_black(),
                    pair[0],
                    pair[1],
                    change
                );
            }
        }
    }

    if verbose {
        println!("\n  Dictionary: {} words", result.dictionary_size);
        println!("  Expanded:   {} words", result.stats.expanded);
        println!("  Discovered: {} words", result.stats.discovered);
        println!("  Time:       {:.3}ms", result.duration.as_secs_f64() * 1000.0);
    }

    println!();
    match &result.ladder {
        Some(ladder) => println!(
            "{}",
            format!("✅ Transformation found! Steps required: {}", ladder.steps())
                .green()
                .bold()
        ),
        None => println!(
            "{}",
            "❌ No valid transformation path found!".red().bold()
        ),
    }
}

/// Print the neighbors of a word
pub fn print_neighbors_result(result: &NeighborsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "NEIGHBORS OF".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if !result.in_dictionary {
        println!(
            "\n{}",
            format!("⚠ '{}' is not in the dictionary", result.word).yellow()
        );
    }

    println!(
        "\n📖 {} of {} dictionary words are one letter away:",
        result.neighbors.len(),
        result.dictionary_size
    );
    for neighbor in &result.neighbors {
        let change = describe_step(&result.word, neighbor).unwrap_or_default();
        println!(
            "  • {}  {}",
            neighbor.text().to_uppercase().bright_white(),
            change.bright_black()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Seed:             {}", result.seed);
    println!("   Pairs tested:     {}", result.total_pairs);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    println!(
        "   Unreachable:      {}",
        format!("{}", result.unreachable).yellow()
    );
    println!(
        "   Average steps:    {}",
        format!("{:.2}", result.average_steps).bright_yellow().bold()
    );
    println!("   Longest ladder:   {}", result.max_steps);
    if let Some((start, goal, steps)) = &result.longest {
        println!("     first seen:     {start} → {goal} ({steps} steps)");
    }
    println!("   Avg expanded:     {:.1} words", result.average_expanded);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Searches/second:  {:.1}", result.searches_per_second);

    if result.solved == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for steps in 0..=result.max_steps {
        if let Some(&count) = result.distribution.get(&steps) {
            let pct = (count as f64 / result.solved as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {steps:2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}
