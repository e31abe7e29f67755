// Prompt renderer — turns ranked clusters into one bounded text block.
//
// The block is pasted verbatim into the summarizer prompt, so its size has to
// be predictable: each cluster shows at most `max_items_per_cluster`
// documents, and each document's text is cut to `max_body_chars`.
//
// Layout per cluster:
//
//   ## Topic: Transformers / Neural / Training
//   Keywords: transformers, neural, training, attention, gpu
//
//   ### <document title>
//   Source: <source> | Author: <author> | Date: <yyyy-mm-dd> | URL: <url>
//   <excerpt or body, truncated>
//
//   ... and 7 more item(s) in this topic
//
// Clusters are separated by a `---` rule.

use crate::topics::{Document, TopicCluster};

use super::truncate_chars;

/// Separator placed between cluster sections.
pub const SECTION_SEPARATOR: &str = "\n\n---\n\n";

/// Size limits for the rendered block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Documents shown per cluster before the "... and N more" note
    pub max_items_per_cluster: usize,
    /// Characters of excerpt/body shown per document
    pub max_body_chars: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_items_per_cluster: 5,
            max_body_chars: 600,
        }
    }
}

/// Render clusters with the default body budget.
pub fn render(clusters: &[TopicCluster], max_items_per_cluster: usize) -> String {
    render_with(
        clusters,
        &RenderOptions {
            max_items_per_cluster,
            ..RenderOptions::default()
        },
    )
}

/// Render clusters into a single text block. Empty input yields "".
pub fn render_with(clusters: &[TopicCluster], options: &RenderOptions) -> String {
    clusters
        .iter()
        .map(|c| render_cluster(c, options))
        .collect::<Vec<_>>()
        .join(SECTION_SEPARATOR)
}

fn render_cluster(cluster: &TopicCluster, options: &RenderOptions) -> String {
    let keywords = if cluster.is_other() || cluster.keywords.is_empty() {
        "mixed topics".to_string()
    } else {
        cluster.keywords.join(", ")
    };

    let mut blocks = vec![format!("## Topic: {}\nKeywords: {}", cluster.label, keywords)];

    blocks.extend(
        cluster
            .documents
            .iter()
            .take(options.max_items_per_cluster)
            .map(|doc| render_document(doc, options.max_body_chars)),
    );

    let hidden = cluster
        .documents
        .len()
        .saturating_sub(options.max_items_per_cluster);
    if hidden > 0 {
        blocks.push(format!("... and {hidden} more item(s) in this topic"));
    }

    blocks.join("\n\n")
}

fn render_document(doc: &Document, max_body_chars: usize) -> String {
    let mut lines = vec![format!("### {}", doc.title.trim())];

    let meta = metadata_line(doc);
    if !meta.is_empty() {
        lines.push(meta);
    }

    if let Some(text) = doc.summary_text().map(str::trim).filter(|t| !t.is_empty()) {
        lines.push(truncate_chars(text, max_body_chars));
    }

    lines.join("\n")
}

/// "Source: x | Author: y | Date: z | URL: u", skipping missing fields.
fn metadata_line(doc: &Document) -> String {
    let mut parts = Vec::new();
    if let Some(source) = &doc.source {
        parts.push(format!("Source: {source}"));
    }
    if let Some(author) = &doc.author {
        parts.push(format!("Author: {author}"));
    }
    if let Some(published) = &doc.published_at {
        parts.push(format!("Date: {}", published.format("%Y-%m-%d")));
    }
    if let Some(url) = &doc.url {
        parts.push(format!("URL: {url}"));
    }
    parts.join(" | ")
}
