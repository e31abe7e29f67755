// Agglomerative topic clustering over TF-IDF vectors.
//
// Every document starts as its own cluster. Each round merges the pair of
// clusters whose vectors are most similar, until the best remaining pair
// falls below the similarity threshold. Clusters that end up too small are
// pooled into a single "Other" bucket, and the rest are labeled from their
// heaviest terms.
//
// The merged vector is a term-wise average of the two sides, with a term
// missing on one side counted as zero. A term only one side knows about is
// therefore halved on every merge, so a cluster's vocabulary drifts toward
// the terms its members share. This is not a true centroid: members are not
// weighted by count.
//
// Cost is O(n^3) in the worst case, fine for the tens to low hundreds of
// documents a feed batch contains. Pairwise similarities are cached and only
// the merged cluster's row is recomputed per round.

use tracing::{debug, info};

use super::document::Document;
use super::label::{make_label, top_keywords, DEFAULT_KEYWORD_COUNT};
use super::similarity::cosine_similarity;
use super::tfidf::{build_tfidf, SparseVector};
use super::tokenize::tokenize;
use super::topic::TopicCluster;
use super::traits::TopicClusterer;

/// Greedy agglomerative clusterer with size/threshold/count controls.
#[derive(Debug, Clone)]
pub struct AgglomerativeClusterer {
    /// At most this many labeled clusters are returned. Overflow clusters
    /// (the smallest, after ranking) are real topics, but they lose their
    /// label and keywords when folded into "Other"
    pub max_clusters: usize,
    /// Clusters with fewer members than this go to "Other"
    pub min_cluster_size: usize,
    /// Merging stops once the most similar pair scores below this
    pub similarity_threshold: f64,
}

impl Default for AgglomerativeClusterer {
    fn default() -> Self {
        Self {
            max_clusters: 8,
            min_cluster_size: 2,
            similarity_threshold: 0.1,
        }
    }
}

/// Cluster documents with explicit parameters.
///
/// Convenience wrapper around [`AgglomerativeClusterer`].
pub fn cluster(
    documents: &[Document],
    max_clusters: usize,
    min_cluster_size: usize,
    similarity_threshold: f64,
) -> Vec<TopicCluster> {
    AgglomerativeClusterer {
        max_clusters,
        min_cluster_size,
        similarity_threshold,
    }
    .cluster(documents)
}

impl TopicClusterer for AgglomerativeClusterer {
    fn cluster(&self, documents: &[Document]) -> Vec<TopicCluster> {
        if documents.is_empty() {
            return Vec::new();
        }

        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|d| tokenize(&d.cluster_text()))
            .collect();
        let (vocabulary, vectors) = build_tfidf(&tokenized);

        debug!(
            documents = documents.len(),
            vocabulary = vocabulary.len(),
            "Built TF-IDF vectors"
        );

        let working = merge_until_threshold(vectors, self.similarity_threshold);
        let merges = documents.len() - working.len();
        let result = self.finalize(documents, working);

        info!(
            documents = documents.len(),
            merges,
            clusters = result.len(),
            outliers = result
                .iter()
                .find(|c| c.is_other())
                .map(TopicCluster::len)
                .unwrap_or(0),
            "Clustered documents"
        );

        result
    }
}

impl AgglomerativeClusterer {
    /// Pool small and overflow clusters into "Other", label the rest, and
    /// rank by size.
    fn finalize(&self, documents: &[Document], working: Vec<WorkingCluster>) -> Vec<TopicCluster> {
        let min_size = self.min_cluster_size.max(1);
        let max_clusters = self.max_clusters.max(1);

        let mut outliers: Vec<usize> = Vec::new();
        let mut kept: Vec<WorkingCluster> = Vec::new();
        for c in working {
            if c.members.len() < min_size {
                outliers.extend(c.members);
            } else {
                kept.push(c);
            }
        }

        // Stable: equal-size clusters keep merge order
        kept.sort_by(|a, b| b.members.len().cmp(&a.members.len()));

        if kept.len() > max_clusters {
            debug!(
                overflow = kept.len() - max_clusters,
                max_clusters, "Folding overflow clusters into Other"
            );
            for c in kept.drain(max_clusters..) {
                outliers.extend(c.members);
            }
        }

        let mut result: Vec<TopicCluster> = kept
            .into_iter()
            .map(|c| {
                let keywords = top_keywords(&c.vector, DEFAULT_KEYWORD_COUNT);
                TopicCluster {
                    label: make_label(&keywords),
                    documents: c.members.iter().map(|&i| documents[i].clone()).collect(),
                    keywords,
                }
            })
            .collect();

        if !outliers.is_empty() {
            outliers.sort_unstable();
            let other =
                TopicCluster::other(outliers.iter().map(|&i| documents[i].clone()).collect());
            // After every cluster at least as large, so "Other" never outranks
            // a real topic of the same size
            let pos = result
                .iter()
                .position(|c| c.len() < other.len())
                .unwrap_or(result.len());
            result.insert(pos, other);
        }

        result
    }
}

/// A cluster while the merge loop is running.
#[derive(Debug, Clone)]
struct WorkingCluster {
    /// Indices into the input batch, ascending
    members: Vec<usize>,
    vector: SparseVector,
}

impl WorkingCluster {
    fn absorb(&mut self, other: WorkingCluster) {
        self.members.extend(other.members);
        self.members.sort_unstable();
        self.vector = average_vectors(&self.vector, &other.vector);
    }
}

/// Term-wise average; a term present on only one side is halved.
fn average_vectors(a: &SparseVector, b: &SparseVector) -> SparseVector {
    let mut merged: SparseVector = a.iter().map(|(t, w)| (t.clone(), w / 2.0)).collect();
    for (term, w) in b {
        *merged.entry(term.clone()).or_insert(0.0) += w / 2.0;
    }
    merged
}

/// Run the merge loop until one cluster is left or the best pair scores below
/// `threshold`. A NaN threshold merges nothing.
fn merge_until_threshold(vectors: Vec<SparseVector>, threshold: f64) -> Vec<WorkingCluster> {
    let mut clusters: Vec<WorkingCluster> = vectors
        .into_iter()
        .enumerate()
        .map(|(i, vector)| WorkingCluster {
            members: vec![i],
            vector,
        })
        .collect();

    if threshold.is_nan() {
        debug!("Similarity threshold is NaN, skipping merges");
        return clusters;
    }

    let mut sims = SimilarityMatrix::build(&clusters);

    while clusters.len() > 1 {
        let Some((i, j, best)) = sims.best_pair() else {
            break;
        };
        if best < threshold {
            debug!(best, threshold, "Best pair below threshold, stopping");
            break;
        }

        debug!(
            absorb = i,
            keep = j,
            similarity = best,
            sizes = ?(clusters[i].members.len(), clusters[j].members.len()),
            "Merging clusters"
        );

        merge_pair(&mut clusters, &mut sims, i, j);
    }

    clusters
}

/// Merge cluster `i` into its higher-indexed partner `j` (`i < j`).
///
/// The merged cluster takes `j`'s place, which is `j - 1` once `i` is gone.
/// Returns that index.
fn merge_pair(
    clusters: &mut Vec<WorkingCluster>,
    sims: &mut SimilarityMatrix,
    i: usize,
    j: usize,
) -> usize {
    let absorbed = clusters.remove(i);
    let target = j - 1;
    clusters[target].absorb(absorbed);
    sims.remove(i);
    sims.refresh(target, clusters);
    target
}

/// Symmetric pairwise similarity cache for the active clusters.
struct SimilarityMatrix {
    rows: Vec<Vec<f64>>,
}

impl SimilarityMatrix {
    fn build(clusters: &[WorkingCluster]) -> Self {
        let k = clusters.len();
        let mut rows = vec![vec![0.0; k]; k];
        for i in 0..k {
            for j in (i + 1)..k {
                let sim = cosine_similarity(&clusters[i].vector, &clusters[j].vector);
                rows[i][j] = sim;
                rows[j][i] = sim;
            }
        }
        Self { rows }
    }

    /// The first pair, in (i, j) scan order with i < j, with the highest
    /// similarity. Later pairs must score strictly higher to win a tie.
    fn best_pair(&self) -> Option<(usize, usize, f64)> {
        let mut best: Option<(usize, usize, f64)> = None;
        for (i, row) in self.rows.iter().enumerate() {
            for (j, &sim) in row.iter().enumerate().skip(i + 1) {
                let better = match best {
                    None => true,
                    Some((_, _, b)) => sim > b,
                };
                if better {
                    best = Some((i, j, sim));
                }
            }
        }
        best
    }

    fn remove(&mut self, idx: usize) {
        self.rows.remove(idx);
        for row in &mut self.rows {
            row.remove(idx);
        }
    }

    /// Recompute row and column `idx` after its cluster changed.
    fn refresh(&mut self, idx: usize, clusters: &[WorkingCluster]) {
        for other in 0..clusters.len() {
            if other == idx {
                continue;
            }
            let sim = cosine_similarity(&clusters[idx].vector, &clusters[other].vector);
            self.rows[idx][other] = sim;
            self.rows[other][idx] = sim;
        }
    }
}
