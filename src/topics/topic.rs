// TopicCluster — one group of related documents produced by the clusterer.

use serde::{Deserialize, Serialize};

use super::document::Document;

/// Label of the catch-all bucket for documents in too-small clusters.
pub const OTHER_LABEL: &str = "Other";

/// A labeled group of documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicCluster {
    /// Human-readable label, e.g. "Transformers / Neural / Training"
    pub label: String,
    /// Member documents, in the order they appeared in the input
    pub documents: Vec<Document>,
    /// Up to five keywords, heaviest first. Empty for "Other".
    pub keywords: Vec<String>,
}

impl TopicCluster {
    /// Build the synthetic "Other" cluster.
    pub fn other(documents: Vec<Document>) -> Self {
        Self {
            label: OTHER_LABEL.to_string(),
            documents,
            keywords: Vec::new(),
        }
    }

    /// Whether this is the catch-all bucket rather than a real topic.
    pub fn is_other(&self) -> bool {
        self.label == OTHER_LABEL && self.keywords.is_empty()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_cluster() {
        let other = TopicCluster::other(vec![Document::new("1", "stray")]);
        assert!(other.is_other());
        assert_eq!(other.len(), 1);
        assert!(other.keywords.is_empty());
    }

    #[test]
    fn test_real_cluster_named_other_is_not_the_bucket() {
        // A real topic whose top keyword happens to be "other" keeps its keywords
        let cluster = TopicCluster {
            label: "Other".to_string(),
            documents: vec![],
            keywords: vec!["other".to_string()],
        };
        assert!(!cluster.is_other());
        assert!(cluster.is_empty());
    }

    #[test]
    fn test_serializes_to_json() {
        let cluster = TopicCluster {
            label: "Rust / Async".to_string(),
            documents: vec![Document::new("a", "Tokio 2")],
            keywords: vec!["rust".to_string(), "async".to_string()],
        };
        let json = serde_json::to_value(&cluster).unwrap();
        assert_eq!(json["label"], "Rust / Async");
        assert_eq!(json["documents"][0]["title"], "Tokio 2");
        assert_eq!(json["keywords"][1], "async");
    }
}
