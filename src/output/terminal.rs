// Colored terminal output for clustering results.
//
// This is what `feedgist cluster` prints: one ranked row per topic with a
// size bar, its keywords, and the titles of its members, so a human can
// sanity-check the grouping before it goes to the summarizer.

use colored::Colorize;

use crate::topics::TopicCluster;

const BAR_WIDTH: usize = 20;
const TITLE_PREVIEW_CHARS: usize = 80;

/// Display ranked clusters in the terminal.
pub fn display_clusters(clusters: &[TopicCluster]) {
    if clusters.is_empty() {
        println!("No documents to cluster. Check that the input file is not empty.");
        return;
    }

    let total: usize = clusters.iter().map(TopicCluster::len).sum();

    println!(
        "\n{}",
        format!(
            "=== {} topics from {} documents ===",
            clusters.iter().filter(|c| !c.is_other()).count(),
            total
        )
        .bold()
    );
    println!();

    for (i, cluster) in clusters.iter().enumerate() {
        let share = cluster.len() as f64 / total.max(1) as f64;

        println!(
            "  {:>2}. {:<40} {} {:>3}",
            i + 1,
            colorize_label(cluster),
            size_bar(share),
            cluster.len()
        );

        if !cluster.keywords.is_empty() {
            println!("      Keywords: {}", cluster.keywords.join(", ").dimmed());
        }
        for doc in &cluster.documents {
            println!(
                "      - {}",
                super::truncate_chars(doc.title.trim(), TITLE_PREVIEW_CHARS)
            );
        }
        println!();
    }
}

/// Print the token sequence for a piece of text.
pub fn display_tokens(text: &str, tokens: &[String]) {
    println!("{}", format!("=== {} tokens ===", tokens.len()).bold());
    println!("  Input: {}", super::truncate_chars(text, 120).dimmed());
    if tokens.is_empty() {
        println!("  (nothing left after stopword and number filtering)");
    } else {
        println!("  {}", tokens.join(" "));
    }
}

/// Share-of-documents bar, colored by how dominant the topic is.
fn size_bar(share: f64) -> colored::ColoredString {
    let filled = (share * BAR_WIDTH as f64).round() as usize;
    let empty = BAR_WIDTH.saturating_sub(filled);
    let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

    if share >= 0.25 {
        bar.bright_green()
    } else if share >= 0.10 {
        bar.bright_yellow()
    } else {
        bar.bright_blue()
    }
}

fn colorize_label(cluster: &TopicCluster) -> colored::ColoredString {
    if cluster.is_other() {
        cluster.label.as_str().dimmed()
    } else {
        cluster.label.as_str().bold()
    }
}
