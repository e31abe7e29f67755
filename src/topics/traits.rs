// Topic clusterer trait — swap-ready abstraction.
//
// The agglomerative TF-IDF clusterer is the only implementation today, but
// callers depend on this trait so an embeddings-based strategy could be
// dropped in without touching the renderer or the CLI.

use super::document::Document;
use super::topic::TopicCluster;

/// Trait for grouping a batch of documents into ranked topic clusters.
pub trait TopicClusterer {
    /// Partition `documents` into clusters, largest first.
    ///
    /// Every input document must appear in exactly one output cluster.
    fn cluster(&self, documents: &[Document]) -> Vec<TopicCluster>;
}
