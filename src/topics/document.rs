// Document — one item in a clustering batch.
//
// Documents arrive from upstream feed adapters as JSON. The engine only reads
// the title, excerpt/body and tags; the remaining metadata is carried through
// so the prompt renderer can cite where each item came from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How much of the body is used for clustering when there is no excerpt.
pub const BODY_CLUSTER_CHARS: usize = 500;

/// A single input document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Opaque handle supplied by the caller (feed item id, file path, ...)
    #[serde(default)]
    pub id: String,
    pub title: String,
    /// Short summary — preferred over the body when present
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl Document {
    /// Create a document with just a handle and a title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            excerpt: None,
            body: None,
            tags: Vec::new(),
            source: None,
            author: None,
            url: None,
            published_at: None,
        }
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// The excerpt if it has content, otherwise the body.
    ///
    /// Blank excerpts are treated as missing so a feed that emits
    /// `"excerpt": ""` still falls back to its body.
    pub fn summary_text(&self) -> Option<&str> {
        self.excerpt
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .or(self.body.as_deref())
    }

    /// The text fed to the tokenizer: title, then excerpt (or the first
    /// `BODY_CLUSTER_CHARS` characters of the body), then every tag.
    pub fn cluster_text(&self) -> String {
        let mut parts: Vec<String> = vec![self.title.clone()];

        match self.excerpt.as_deref().filter(|e| !e.trim().is_empty()) {
            Some(excerpt) => parts.push(excerpt.to_string()),
            None => {
                if let Some(body) = &self.body {
                    parts.push(body.chars().take(BODY_CLUSTER_CHARS).collect());
                }
            }
        }

        parts.extend(self.tags.iter().cloned());
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_text_prefers_excerpt() {
        let doc = Document::new("1", "Rust 2024")
            .with_excerpt("edition notes")
            .with_body("long body that should be ignored")
            .with_tags(["lang", "release"]);
        assert_eq!(doc.cluster_text(), "Rust 2024 edition notes lang release");
    }

    #[test]
    fn test_cluster_text_truncates_body() {
        let body = "x".repeat(BODY_CLUSTER_CHARS + 200);
        let doc = Document::new("1", "T").with_body(body);
        let text = doc.cluster_text();
        assert_eq!(text.chars().count(), 2 + BODY_CLUSTER_CHARS);
    }

    #[test]
    fn test_blank_excerpt_falls_back_to_body() {
        let doc = Document::new("1", "T").with_excerpt("  ").with_body("body");
        assert_eq!(doc.summary_text(), Some("body"));
        assert_eq!(doc.cluster_text(), "T body");
    }

    #[test]
    fn test_deserialize_minimal_json() {
        let doc: Document = serde_json::from_str(r#"{"title": "Only a title"}"#).unwrap();
        assert_eq!(doc.title, "Only a title");
        assert!(doc.tags.is_empty());
        assert!(doc.summary_text().is_none());
    }
}
