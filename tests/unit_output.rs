// Unit tests for output functions.
//
// Tests the prompt renderer's size bounds and layout, and truncate_chars
// UTF-8 safety.

use feedgist::output::prompt::{render, render_with, RenderOptions, SECTION_SEPARATOR};
use feedgist::output::truncate_chars;
use feedgist::topics::{Document, TopicCluster};

fn cluster_with(label: &str, n: usize) -> TopicCluster {
    TopicCluster {
        label: label.to_string(),
        documents: (0..n)
            .map(|i| {
                let mut doc = Document::new(format!("{label}-{i}"), format!("{label} item {i}"))
                    .with_body(format!("Body of item {i}. ").repeat(20));
                doc.author = Some(format!("author{i}"));
                doc
            })
            .collect(),
        keywords: vec!["alpha".to_string(), "beta".to_string()],
    }
}

fn subsection_count(text: &str) -> usize {
    text.lines().filter(|l| l.starts_with("### ")).count()
}

// ============================================================
// render — size bounds
// ============================================================

#[test]
fn render_ten_documents_capped_at_three() {
    let out = render(&[cluster_with("Rust", 10)], 3);
    assert_eq!(subsection_count(&out), 3);
    assert!(out.contains("7 more item(s)"), "got:\n{out}");
}

#[test]
fn render_caps_each_cluster_independently() {
    let clusters = vec![cluster_with("Rust", 6), cluster_with("Go", 2)];
    let out = render(&clusters, 4);
    assert_eq!(subsection_count(&out), 6);
    assert!(out.contains("2 more item(s)"));
    assert_eq!(out.matches("more item(s)").count(), 1);
}

#[test]
fn render_body_budget_is_respected() {
    let options = RenderOptions {
        max_items_per_cluster: 1,
        max_body_chars: 25,
    };
    let out = render_with(&[cluster_with("Rust", 1)], &options);
    let body = out.lines().last().unwrap();
    assert!(body.ends_with("..."));
    assert!(body.chars().count() <= 25 + 3, "body too long: {body}");
}

#[test]
fn render_empty_is_empty_string() {
    assert_eq!(render(&[], 5), "");
    assert_eq!(render_with(&[], &RenderOptions::default()), "");
}

// ============================================================
// render — layout
// ============================================================

#[test]
fn render_one_section_per_cluster() {
    let clusters = vec![
        cluster_with("Rust", 1),
        cluster_with("Go", 1),
        TopicCluster::other(vec![Document::new("x", "Stray")]),
    ];
    let out = render(&clusters, 3);
    assert_eq!(out.matches(SECTION_SEPARATOR).count(), 2);
    assert_eq!(out.matches("## Topic: ").count(), 3);
    assert!(out.contains("## Topic: Other\nKeywords: mixed topics"));
    assert!(out.contains("## Topic: Rust\nKeywords: alpha, beta"));
}

#[test]
fn render_metadata_only_lists_present_fields() {
    let out = render(&[cluster_with("Rust", 1)], 3);
    assert!(out.contains("### Rust item 0\nAuthor: author0\n"));
    assert!(!out.contains("Source:"));
    assert!(!out.contains("URL:"));
}

#[test]
fn render_prefers_excerpt_over_body() {
    let doc = Document::new("1", "Title")
        .with_excerpt("Short excerpt")
        .with_body("Much longer body text");
    let cluster = TopicCluster {
        label: "Topic".to_string(),
        documents: vec![doc],
        keywords: vec!["topic".to_string()],
    };
    let out = render(&[cluster], 3);
    assert!(out.contains("Short excerpt"));
    assert!(!out.contains("Much longer body text"));
}

// ============================================================
// truncate_chars — UTF-8 safe truncation
// ============================================================

#[test]
fn truncate_empty_string() {
    assert_eq!(truncate_chars("", 10), "");
}

#[test]
fn truncate_exactly_at_limit() {
    assert_eq!(truncate_chars("hello", 5), "hello");
}

#[test]
fn truncate_one_over_limit() {
    assert_eq!(truncate_chars("hello!", 5), "hello...");
}

#[test]
fn truncate_drops_trailing_space_before_marker() {
    assert_eq!(truncate_chars("hello world", 6), "hello...");
}

#[test]
fn truncate_emoji_safe() {
    // "Hello 🌍!" = 8 chars (emoji is 1 char, 4 bytes)
    let text = "Hello 🌍!";
    assert_eq!(truncate_chars(text, 7), "Hello 🌍...");
}

#[test]
fn truncate_cjk_characters() {
    assert_eq!(truncate_chars("日本語テスト", 3), "日本語...");
}
