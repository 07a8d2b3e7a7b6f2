// Colored terminal output for semantic groups and context rankings.
//
// The CLI's display code lives here; main.rs only decides what to show.

use colored::Colorize;

use super::truncate_chars;
use crate::frequency::context::RankedGroup;
use crate::grouping::assemble::GroupingOutcome;

/// Display every group of a grouping run.
pub fn display_groups(outcome: &GroupingOutcome) {
    if outcome.groups.is_empty() {
        println!("No semantic groups found. Do the words have senses in the lexicon?");
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== Semantic Groups ({} groups from {} senses) ===",
            outcome.groups.len(),
            outcome.sense_count
        )
        .bold()
    );
    println!();

    for (i, group) in outcome.groups.iter().enumerate() {
        let words: Vec<&str> = group.words.iter().map(|s| s.as_str()).collect();
        let senses: Vec<&str> = group.senses.iter().map(|s| s.id()).collect();

        println!(
            "  {:>3}. {:<40} {}",
            i + 1,
            truncate_chars(&group.label(), 40).bold(),
            format!("({} senses)", senses.len()).dimmed()
        );
        println!("       Words:  {}", words.join(", "));
        println!("       Senses: {}", truncate_chars(&senses.join(", "), 100).dimmed());
    }
    println!();

    if outcome.budget_exceeded {
        println!(
            "  {} search budget exceeded, groups above are incomplete",
            "!".yellow().bold()
        );
    }
}

/// Display groups ranked by specific/generic frequency ratio.
pub fn display_ranked_groups(ranked: &[RankedGroup]) {
    if ranked.is_empty() {
        println!("No groups passed the frequency cutoff.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Context Groups ({} groups) ===", ranked.len()).bold()
    );
    println!();

    println!(
        "  {:>4}  {:<40} {:>7}  {:>8}  {:>7}",
        "Rank".dimmed(),
        "Group".dimmed(),
        "Ratio".dimmed(),
        "Specific".dimmed(),
        "Generic".dimmed(),
    );
    println!("  {}", "-".repeat(74).dimmed());

    for (i, entry) in ranked.iter().enumerate() {
        let ratio = format!("{:>7.2}", entry.ratio);
        // Above 1.0 the group leans towards the specific collection
        let colored_ratio = if entry.ratio >= 1.0 {
            ratio.bright_green()
        } else {
            ratio.normal()
        };

        println!(
            "  {:>4}. {:<40} {}  {:>8.3}  {:>7.3}",
            i + 1,
            truncate_chars(&entry.group.label(), 40),
            colored_ratio,
            entry.specific_frequency,
            entry.generic_frequency,
        );
    }
    println!();
}
